//! Sigil SDK - Types for writing sigil extensions
//!
//! This crate provides the minimal types needed to write extension functions
//! for the sigil runtime without depending on the engine itself:
//!
//! - **Value**: the dynamic value representation (`value` module)
//! - **Symbol**: unique, identity-compared slot keys (`symbol` module)
//! - **ExtensionFn**: the receiver-first calling convention (`extension` module)
//! - **NativeError**: the error type extensions report failure with (`error` module)
//!
//! # Example
//!
//! ```rust
//! use sigil_sdk::{extension, Value};
//!
//! let last = extension(|receiver, _args| {
//!     let elements = receiver
//!         .as_array()
//!         .ok_or_else(|| sigil_sdk::NativeError::type_mismatch("array", receiver.type_name()))?;
//!     let elements = elements.read();
//!     Ok(elements.last().cloned().unwrap_or(Value::null()))
//! });
//!
//! let arr = Value::array(vec![Value::int(1), Value::int(2), Value::int(3)]);
//! assert_eq!(last(arr, &[]).unwrap(), Value::int(3));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod convert;
pub mod error;
pub mod extension;
pub mod symbol;
pub mod value;

pub use error::{NativeError, NativeResult};
pub use extension::{extension, ExtensionFn};
pub use symbol::Symbol;
pub use value::{Instance, Value};
