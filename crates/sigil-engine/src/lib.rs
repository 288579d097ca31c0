//! Sigil Engine
//!
//! A small dynamic-class runtime whose headline operation is
//! [`Runtime::patch`]: attach an externally-defined function to a class's
//! shared prototype under a freshly-generated, non-enumerable [`Symbol`]
//! key. Because the key is identity-compared and never enumerable, a patch
//! cannot collide with existing members, cannot be overwritten by a later
//! patch, and stays invisible to key enumeration and serialization.
//!
//! - **Object model**: classes with single inheritance and shared,
//!   in-place-mutable prototypes (`object` module)
//! - **Registry**: classes by ID and name, chain-walking method resolution
//!   (`registry` module)
//! - **Built-ins**: the classes primitive values dispatch through
//!   (`builtins` module)
//! - **Runtime**: patching, named definition, dispatch, enumeration
//!   (`runtime` module)
//! - **Serialization**: JSON projection of instance data (`serialize` module)
//!
//! # Example
//!
//! ```rust,ignore
//! use sigil_engine::{builtins::ARRAY, Runtime};
//! use sigil_sdk::Value;
//!
//! let runtime = Runtime::new();
//!
//! // Attach `last` to every array, keyed by a fresh symbol.
//! let last = runtime.patch(
//!     ARRAY,
//!     |receiver, _args| {
//!         let elements = receiver.as_array().unwrap().read();
//!         Ok(elements.last().cloned().unwrap_or(Value::null()))
//!     },
//!     Some("last"),
//! )?;
//!
//! let arr = Value::array(vec![Value::int(1), Value::int(2), Value::int(3)]);
//! assert_eq!(runtime.invoke(&arr, &last, &[])?, Value::int(3));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod builtins;
pub mod error;
pub mod object;
pub mod registry;
pub mod runtime;
pub mod serialize;

// Re-export SDK types (canonical definitions live in sigil-sdk)
pub use sigil_sdk::{extension, ExtensionFn, Instance, NativeError, NativeResult, Symbol, Value};

pub use builtins::class_of;
pub use error::{EngineError, EngineResult};
pub use object::{Class, MethodSlot, Prototype};
pub use registry::ClassRegistry;
pub use runtime::Runtime;
pub use serialize::{to_json, to_json_string};
