//! Dynamic value representation
//!
//! `Value` is the dynamically-typed value extensions receive and return.
//! Primitives are stored inline; strings, arrays, and object instances are
//! reference-counted, so cloning a `Value` is cheap and clones of a heap
//! value alias the same storage.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::symbol::Symbol;

/// A dynamically-typed value.
///
/// # Equality
///
/// Primitives and strings compare structurally. Arrays and objects compare
/// by identity (two values are equal only if they alias the same storage),
/// and symbols compare by their unique ID.
#[derive(Clone)]
pub enum Value {
    /// The null value
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// Immutable string
    Str(Arc<str>),
    /// Symbol key as a first-class value
    Symbol(Symbol),
    /// Mutable array, shared by all clones
    Array(Arc<RwLock<Vec<Value>>>),
    /// Object instance, shared by all clones
    Object(Arc<Instance>),
}

impl Value {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a null value
    pub fn null() -> Self {
        Value::Null
    }

    /// Create a boolean value
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create an integer value
    pub fn int(i: i64) -> Self {
        Value::Int(i)
    }

    /// Create a float value
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a string value
    pub fn str(s: &str) -> Self {
        Value::Str(Arc::from(s))
    }

    /// Create an array value from its elements
    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Arc::new(RwLock::new(elements)))
    }

    /// Create an object value from an instance
    pub fn object(instance: Instance) -> Self {
        Value::Object(Arc::new(instance))
    }

    // ========================================================================
    // Type checks
    // ========================================================================

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is a boolean
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if value is an integer
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if value is a float
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Check if value is a string
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Check if value is a symbol
    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    /// Check if value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Check if value is an object instance
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    // ========================================================================
    // Extractors
    // ========================================================================

    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract integer value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Extract float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extract symbol
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Extract array storage
    pub fn as_array(&self) -> Option<&Arc<RwLock<Vec<Value>>>> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Extract object instance
    pub fn as_object(&self) -> Option<&Arc<Instance>> {
        match self {
            Value::Object(instance) => Some(instance),
            _ => None,
        }
    }

    /// Get type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Value::Null"),
            Value::Bool(b) => write!(f, "Value::Bool({b})"),
            Value::Int(i) => write!(f, "Value::Int({i})"),
            Value::Float(v) => write!(f, "Value::Float({v})"),
            Value::Str(s) => write!(f, "Value::Str({s:?})"),
            Value::Symbol(symbol) => write!(f, "Value::{symbol:?}"),
            Value::Array(elements) => write!(f, "Value::Array(len={})", elements.read().len()),
            Value::Object(instance) => {
                write!(f, "Value::Object(class_id={})", instance.class_id)
            }
        }
    }
}

/// Object instance (heap-allocated).
///
/// Fields are dynamic: any name can be defined at any time. The field map is
/// lock-guarded so instances can be shared across threads.
pub struct Instance {
    /// Class ID (index into the engine's class registry)
    pub class_id: usize,
    /// Named field values
    fields: RwLock<FxHashMap<String, Value>>,
}

impl Instance {
    /// Create a new instance with no fields
    pub fn new(class_id: usize) -> Self {
        Self {
            class_id,
            fields: RwLock::new(FxHashMap::default()),
        }
    }

    /// Set a field value, defining the field if it does not exist
    pub fn set_field(&self, name: &str, value: Value) {
        self.fields.write().insert(name.to_string(), value);
    }

    /// Get a field value by name
    pub fn get_field(&self, name: &str) -> Option<Value> {
        self.fields.read().get(name).cloned()
    }

    /// Check if a field is defined
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.read().contains_key(name)
    }

    /// Number of defined fields
    pub fn field_count(&self) -> usize {
        self.fields.read().len()
    }

    /// Field names, sorted for stable enumeration order
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fields.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("class_id", &self.class_id)
            .field("fields", &self.field_names())
            .finish()
    }
}
