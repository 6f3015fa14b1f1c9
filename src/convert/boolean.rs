use crate::convert::convert_first;
use crate::error::Error;
use crate::types::Value;

/// Evaluate a value and convert it to a boolean, or `None`.
///
/// Only `1`, `"1"` and `true` give `true`; only `0`, `"0"` and `false` give
/// `false`. There is no truthiness.
pub fn booleanify_with(input: &Value) -> Result<Option<bool>, Error> {
    convert_first(input, to_boolean)
}

fn to_boolean(v: &Value) -> Option<bool> {
    match v {
        Value::Number(n) if *n == 1.0 => Some(true),
        Value::Number(n) if *n == 0.0 => Some(false),
        Value::String(s) if s == "1" => Some(true),
        Value::String(s) if s == "0" => Some(false),
        Value::Boolean(b) => Some(*b),
        _ => None,
    }
}
