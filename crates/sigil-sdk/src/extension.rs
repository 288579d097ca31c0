//! Extension function type — the callable attached to prototypes
//!
//! An extension is an ordinary Rust function (or closure) with the receiver
//! prepended to its parameter list. Dispatch supplies the receiver, so a
//! slot invoked on receiver `r` with arguments `a1..an` behaves exactly like
//! calling the underlying function with `(r, [a1..an])`: same value, same
//! error, nothing swallowed or rewritten in between.

use std::sync::Arc;

use crate::error::NativeResult;
use crate::value::Value;

/// An extension function attachable to a class prototype.
///
/// - first argument: the receiver the method was invoked on
/// - second argument: the call-site arguments, in order
pub type ExtensionFn = Arc<dyn Fn(Value, &[Value]) -> NativeResult<Value> + Send + Sync>;

/// Wrap a closure as an [`ExtensionFn`]
pub fn extension(
    f: impl Fn(Value, &[Value]) -> NativeResult<Value> + Send + Sync + 'static,
) -> ExtensionFn {
    Arc::new(f)
}
