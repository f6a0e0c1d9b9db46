//! Conversion from already-parsed JSON trees.
//!
//! JSON has no undefined, no holes and no behaviour, so a converted tree only
//! ever contains `Null`, `Bool`, `Number`, `Text`, dense arrays and plain
//! records.

use super::{Object, Value};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => Value::array(items),
            serde_json::Value::Object(map) => map
                .into_iter()
                .fold(Object::record(), |builder, (k, v)| {
                    builder.property(k, Value::from(v))
                })
                .build()
                .into(),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Value::from(value.clone())
    }
}
