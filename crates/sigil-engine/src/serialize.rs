//! JSON projection of values
//!
//! Serialization covers instance data only: fields, elements, primitives.
//! Prototype contents are not data and are never serialized, so patched
//! slots cannot leak through this surface. Symbols have no JSON form:
//! symbol-valued fields are skipped and a top-level symbol projects to null.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use sigil_sdk::Value;

/// Serialize adapter over a borrowed value
struct JsonValue<'a>(&'a Value);

impl Serialize for JsonValue<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Symbol(_) => serializer.serialize_unit(),
            Value::Array(elements) => {
                let elements = elements.read();
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements.iter() {
                    seq.serialize_element(&JsonValue(element))?;
                }
                seq.end()
            }
            Value::Object(instance) => {
                // field_names is sorted, so object output is deterministic
                let names = instance.field_names();
                let mut map = serializer.serialize_map(Some(names.len()))?;
                for name in names {
                    let Some(field) = instance.get_field(&name) else {
                        continue;
                    };
                    if field.is_symbol() {
                        continue;
                    }
                    map.serialize_entry(&name, &JsonValue(&field))?;
                }
                map.end()
            }
        }
    }
}

/// Project a value into a `serde_json::Value`.
///
/// Non-finite floats have no JSON form and collapse to null, as do symbols.
pub fn to_json(value: &Value) -> serde_json::Value {
    serde_json::to_value(JsonValue(value)).unwrap_or(serde_json::Value::Null)
}

/// Render a value as a JSON string
pub fn to_json_string(value: &Value) -> String {
    to_json(value).to_string()
}
