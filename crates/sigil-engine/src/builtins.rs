//! Built-in class definitions
//!
//! Defines the well-known classes that primitive values dispatch through,
//! and installs them into a fresh registry. Every built-in except `Object`
//! inherits from `Object`, so a slot patched onto `Object` is reachable
//! from any receiver.

use sigil_sdk::{extension, NativeError, NativeResult, Value};

use crate::object::Class;
use crate::registry::ClassRegistry;

/// Class ID for `Object`, the root of the built-in hierarchy
pub const OBJECT: usize = 0;
/// Class ID for `Array`
pub const ARRAY: usize = 1;
/// Class ID for `String`
pub const STRING: usize = 2;
/// Class ID for `Number` (both int and float values)
pub const NUMBER: usize = 3;
/// Class ID for `Boolean`
pub const BOOLEAN: usize = 4;

/// Install the built-in classes into an empty registry.
///
/// IDs are assigned in declaration order; `install` must run before any
/// user class is registered so the constants above stay valid.
pub fn install(registry: &mut ClassRegistry) {
    debug_assert_eq!(registry.next_class_id(), OBJECT);

    registry.register_class(Class::new(OBJECT, "Object".to_string()));

    let mut array = Class::with_parent(ARRAY, "Array".to_string(), OBJECT);
    array.prototype.define_method("push", extension(array_push));
    array.prototype.define_method("pop", extension(array_pop));
    array.prototype.define_method("last", extension(array_last));
    array
        .prototype
        .define_method("length", extension(array_length));
    registry.register_class(array);

    registry.register_class(Class::with_parent(STRING, "String".to_string(), OBJECT));
    registry.register_class(Class::with_parent(NUMBER, "Number".to_string(), OBJECT));
    registry.register_class(Class::with_parent(BOOLEAN, "Boolean".to_string(), OBJECT));
}

/// Map a value to the class it dispatches through.
///
/// Object instances report their own class; `null` and symbol values
/// dispatch through `Object`.
pub fn class_of(value: &Value) -> usize {
    match value {
        Value::Object(instance) => instance.class_id,
        Value::Array(_) => ARRAY,
        Value::Str(_) => STRING,
        Value::Int(_) | Value::Float(_) => NUMBER,
        Value::Bool(_) => BOOLEAN,
        Value::Null | Value::Symbol(_) => OBJECT,
    }
}

fn expect_array(receiver: &Value) -> NativeResult<&std::sync::Arc<parking_lot::RwLock<Vec<Value>>>> {
    receiver
        .as_array()
        .ok_or_else(|| NativeError::type_mismatch("array", receiver.type_name()))
}

/// `arr.push(values...)` - append elements, returns new length
fn array_push(receiver: Value, args: &[Value]) -> NativeResult<Value> {
    let elements = expect_array(&receiver)?;
    let mut elements = elements.write();
    for arg in args {
        elements.push(arg.clone());
    }
    Ok(Value::int(elements.len() as i64))
}

/// `arr.pop()` - remove and return the last element, null when empty
fn array_pop(receiver: Value, _args: &[Value]) -> NativeResult<Value> {
    let elements = expect_array(&receiver)?;
    let popped = elements.write().pop();
    Ok(popped.unwrap_or(Value::Null))
}

/// `arr.last()` - return the last element without removing it, null when empty
fn array_last(receiver: Value, _args: &[Value]) -> NativeResult<Value> {
    let elements = expect_array(&receiver)?;
    let elements = elements.read();
    Ok(elements.last().cloned().unwrap_or(Value::Null))
}

/// `arr.length()` - number of elements
fn array_length(receiver: Value, _args: &[Value]) -> NativeResult<Value> {
    let elements = expect_array(&receiver)?;
    let len = elements.read().len();
    Ok(Value::int(len as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigil_sdk::Instance;

    fn installed() -> ClassRegistry {
        let mut registry = ClassRegistry::new();
        install(&mut registry);
        registry
    }

    #[test]
    fn test_install_registers_builtins() {
        let registry = installed();
        assert_eq!(registry.get_class(OBJECT).unwrap().name, "Object");
        assert_eq!(registry.get_class(ARRAY).unwrap().name, "Array");
        assert_eq!(registry.get_class(STRING).unwrap().name, "String");
        assert_eq!(registry.get_class(NUMBER).unwrap().name, "Number");
        assert_eq!(registry.get_class(BOOLEAN).unwrap().name, "Boolean");
        assert_eq!(registry.next_class_id(), 5);
    }

    #[test]
    fn test_builtins_inherit_from_object() {
        let registry = installed();
        assert_eq!(registry.get_class(OBJECT).unwrap().parent_id, None);
        for id in [ARRAY, STRING, NUMBER, BOOLEAN] {
            assert_eq!(registry.get_class(id).unwrap().parent_id, Some(OBJECT));
        }
    }

    #[test]
    fn test_class_of() {
        assert_eq!(class_of(&Value::null()), OBJECT);
        assert_eq!(class_of(&Value::bool(true)), BOOLEAN);
        assert_eq!(class_of(&Value::int(1)), NUMBER);
        assert_eq!(class_of(&Value::float(1.5)), NUMBER);
        assert_eq!(class_of(&Value::str("s")), STRING);
        assert_eq!(class_of(&Value::array(vec![])), ARRAY);
        assert_eq!(class_of(&Value::object(Instance::new(3))), 3);
    }

    #[test]
    fn test_array_push_and_length() {
        let arr = Value::array(vec![Value::int(1)]);
        let len = array_push(arr.clone(), &[Value::int(2), Value::int(3)]).unwrap();
        assert_eq!(len, Value::int(3));
        assert_eq!(array_length(arr, &[]).unwrap(), Value::int(3));
    }

    #[test]
    fn test_array_pop() {
        let arr = Value::array(vec![Value::int(1), Value::int(2)]);
        assert_eq!(array_pop(arr.clone(), &[]).unwrap(), Value::int(2));
        assert_eq!(array_pop(arr.clone(), &[]).unwrap(), Value::int(1));
        assert_eq!(array_pop(arr, &[]).unwrap(), Value::null());
    }

    #[test]
    fn test_array_last() {
        let arr = Value::array(vec![Value::int(1), Value::int(2)]);
        assert_eq!(array_last(arr.clone(), &[]).unwrap(), Value::int(2));
        // last does not remove
        assert_eq!(array_length(arr, &[]).unwrap(), Value::int(2));
    }

    #[test]
    fn test_array_methods_reject_non_arrays() {
        let err = array_push(Value::int(1), &[]).unwrap_err();
        assert!(matches!(err, NativeError::TypeMismatch { .. }));
    }
}
