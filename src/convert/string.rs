use crate::config::Options;
use crate::convert::number_format::format_number;
use crate::convert::{probe_display, probe_value_of, resolve_callable};
use crate::error::Error;
use crate::types::Value;

/// Evaluate a value and convert it to a string, or `None`.
///
/// For records both accessors are evaluated, value accessor first. A display
/// string other than the placeholder wins; otherwise a non-null value accessor
/// result is converted; otherwise the display result is.
pub fn stringify_with(input: &Value, options: &Options) -> Result<Option<String>, Error> {
    let input = resolve_callable(input)?;
    match &*input {
        Value::Null => Ok(None),
        Value::Record(record) => {
            let value = probe_value_of(record.as_ref())?;
            let display = probe_display(record.as_ref())?
                .filter(|d| d.as_str() != Some(options.placeholder.as_str()));

            if let Some(Value::String(s)) = &display {
                return Ok(Some(s.clone()));
            }
            match value {
                Some(v) if !v.is_null() => Ok(to_text(&v)),
                _ => Ok(display.as_ref().and_then(to_text)),
            }
        }
        scalar => Ok(to_text(scalar)),
    }
}

fn to_text(v: &Value) -> Option<String> {
    match v {
        Value::Number(n) => format_number(*n),
        Value::String(s) => Some(s.clone()),
        Value::Boolean(b) => Some(if *b { "1" } else { "0" }.to_string()),
        _ => None,
    }
}
