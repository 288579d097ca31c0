//! Conversions between Rust types and `Value`
//!
//! `From` impls cover the infallible direction; `TryFrom` extracts Rust
//! primitives back out, failing with `NativeError::TypeMismatch` when the
//! value holds something else.

use std::sync::Arc;

use crate::error::NativeError;
use crate::symbol::Symbol;
use crate::value::Value;

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Arc::from(s.as_str()))
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::array(elements)
    }
}

impl TryFrom<Value> for bool {
    type Error = NativeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value
            .as_bool()
            .ok_or_else(|| NativeError::type_mismatch("bool", value.type_name()))
    }
}

impl TryFrom<Value> for i64 {
    type Error = NativeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value
            .as_int()
            .ok_or_else(|| NativeError::type_mismatch("int", value.type_name()))
    }
}

impl TryFrom<Value> for f64 {
    type Error = NativeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value
            .as_float()
            .ok_or_else(|| NativeError::type_mismatch("float", value.type_name()))
    }
}

impl TryFrom<Value> for String {
    type Error = NativeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| NativeError::type_mismatch("string", value.type_name()))
    }
}
