use crate::error::Error;
use crate::traits::Record;
use crate::types::Value;
use std::sync::Arc;

/// A JSON object or array taken as input.
///
/// Behaves like a plain native object: its value accessor returns the
/// record itself, so none of the conversions accept it.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRecord(serde_json::Value);

impl JsonRecord {
    pub fn json(&self) -> &serde_json::Value {
        &self.0
    }
}

impl Record for JsonRecord {
    fn value_of(&self) -> Option<Result<Value, Error>> {
        Some(Ok(Value::Record(Arc::new(self.clone()))))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => n.as_f64().map(Value::Number).unwrap_or(Value::Null),
            serde_json::Value::String(s) => Value::String(s),
            other => Value::record(JsonRecord(other)),
        }
    }
}

/// Parse JSON text into a [`Value`].
pub fn value_from_json(json: &str) -> Result<Value, Error> {
    let parsed: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| Error::new(format!("Invalid JSON: {}", e), None))?;
    Ok(parsed.into())
}
