//! Conversion entry points and the callable/record unwrapping they share.

pub mod boolean;
pub mod number;
pub mod number_format;
pub mod numeric_parse;
pub mod string;

use crate::error::Error;
use crate::traits::Record;
use crate::types::Value;
use log::trace;
use std::borrow::Cow;

pub use boolean::booleanify_with;
pub use number::numberify_with;
pub use string::stringify_with;

/// Invoke a callable input once. The result is not resolved again.
pub(crate) fn resolve_callable(input: &Value) -> Result<Cow<'_, Value>, Error> {
    match input {
        Value::Callable(f) => {
            let out = f.call()?;
            trace!(target: "strictify", "callable returned {}", out.kind());
            Ok(Cow::Owned(out))
        }
        other => Ok(Cow::Borrowed(other)),
    }
}

pub(crate) fn probe_value_of(record: &dyn Record) -> Result<Option<Value>, Error> {
    match record.value_of() {
        Some(result) => {
            let out = result?;
            trace!(target: "strictify", "value accessor returned {}", out.kind());
            Ok(Some(out))
        }
        None => Ok(None),
    }
}

pub(crate) fn probe_display(record: &dyn Record) -> Result<Option<Value>, Error> {
    match record.display() {
        Some(result) => {
            let out = result?;
            trace!(target: "strictify", "display accessor returned {}", out.kind());
            Ok(Some(out))
        }
        None => Ok(None),
    }
}

/// Shared shape of `numberify` and `booleanify`: resolve a callable, stop on
/// null, then try the value accessor and fall back to the display accessor.
/// The display accessor is only invoked when the value accessor is missing or
/// did not finalize.
pub(crate) fn convert_first<T, F>(input: &Value, finalize: F) -> Result<Option<T>, Error>
where
    F: Fn(&Value) -> Option<T>,
{
    let input = resolve_callable(input)?;
    match &*input {
        Value::Null => Ok(None),
        Value::Record(record) => {
            if let Some(v) = probe_value_of(record.as_ref())? {
                if let Some(out) = finalize(&v) {
                    return Ok(Some(out));
                }
            }
            Ok(probe_display(record.as_ref())?.and_then(|v| finalize(&v)))
        }
        scalar => Ok(finalize(scalar)),
    }
}
