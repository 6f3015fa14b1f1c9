use crate::config::Options;
use crate::convert::convert_first;
use crate::convert::numeric_parse::parse_strict;
use crate::error::Error;
use crate::types::Value;

/// Evaluate a value and convert it to a finite number, or `None`.
pub fn numberify_with(input: &Value, options: &Options) -> Result<Option<f64>, Error> {
    convert_first(input, |v| to_finite(v, options))
}

fn to_finite(v: &Value, options: &Options) -> Option<f64> {
    match v {
        Value::Number(n) if n.is_finite() => Some(*n),
        Value::String(s) => parse_strict(s, options.radix_literals),
        Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}
