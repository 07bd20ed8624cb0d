//! Tagged value type for custom field data.
//!
//! The API transports `custom_data` as a loose JSON object. Internally each
//! entry is one of four shapes, which keeps the per-kind form logic
//! exhaustive at compile time.

use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    /// A calendar date ("YYYY-MM-DD") or combined stamp ("YYYY-MM-DDTHH:MM")
    DateTime(String),
}

impl FieldValue {
    /// String representation used to populate an editable input.
    /// Numbers with no fractional part print without a decimal point.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) | FieldValue::DateTime(s) => s.clone(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            FieldValue::Bool(b) => b.to_string(),
        }
    }

    pub fn as_bool(&self) -> bool {
        matches!(self, FieldValue::Bool(true))
    }

    /// An empty value does not satisfy a required field
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::DateTime(s) => s.is_empty(),
            FieldValue::Number(_) | FieldValue::Bool(_) => false,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) | FieldValue::DateTime(s) => Value::String(s.clone()),
            FieldValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            FieldValue::Bool(b) => Value::Bool(*b),
        }
    }

    /// Best-effort conversion from wire JSON. Strings come back as `Text`
    /// (the form layer reinterprets them per declared kind); null and
    /// compound values are dropped.
    pub fn from_json(v: &Value) -> Option<Self> {
        match v {
            Value::String(s) => Some(FieldValue::Text(s.clone())),
            Value::Number(n) => n.as_f64().map(FieldValue::Number),
            Value::Bool(b) => Some(FieldValue::Bool(*b)),
            _ => None,
        }
    }
}

/// Convert a wire `custom_data` object into the typed map
pub fn map_from_json(obj: &Value) -> BTreeMap<String, FieldValue> {
    let mut out = BTreeMap::new();
    if let Value::Object(entries) = obj {
        for (name, v) in entries {
            if let Some(fv) = FieldValue::from_json(v) {
                out.insert(name.clone(), fv);
            }
        }
    }
    out
}

/// Convert the typed map back into a wire `custom_data` object
pub fn map_to_json(map: &BTreeMap<String, FieldValue>) -> Value {
    let mut obj = serde_json::Map::new();
    for (name, fv) in map {
        obj.insert(name.clone(), fv.to_json());
    }
    Value::Object(obj)
}
