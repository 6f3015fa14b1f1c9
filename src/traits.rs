use crate::error::Error;
use crate::types::{Callable, Value};
use std::fmt;

/// An object that may expose a value accessor and a display accessor.
///
/// Both accessors are optional capabilities. Return `None` when the record
/// does not have one; return `Some` with the accessor's result otherwise.
/// Conversions call each accessor at most once.
///
/// # Example
/// ```rust
/// use strictify::{numberify, stringify, Error, Record, Value};
///
/// #[derive(Debug)]
/// struct Range { min: f64, max: f64 }
///
/// impl Record for Range {
///     fn value_of(&self) -> Option<Result<Value, Error>> {
///         Some(Ok(Value::Number(self.max - self.min)))
///     }
/// }
///
/// let range = Value::record(Range { min: 0.0, max: 5.0 });
/// assert_eq!(numberify(&range).unwrap(), Some(5.0));
/// assert_eq!(stringify(&range).unwrap(), Some("5".to_string()));
/// ```
pub trait Record: Send + Sync + fmt::Debug {
    /// The record's natural scalar value.
    fn value_of(&self) -> Option<Result<Value, Error>> {
        None
    }

    /// Human-readable text for the record.
    fn display(&self) -> Option<Result<Value, Error>> {
        None
    }
}

/// A record assembled from optional closures.
///
/// ```rust
/// use strictify::{stringify, FnRecord, Value};
///
/// let five = FnRecord::new()
///     .with_value_of(|| Ok(Value::Number(5.0)))
///     .with_display(|| Ok(Value::from("five")))
///     .into_value();
/// assert_eq!(stringify(&five).unwrap(), Some("five".to_string()));
/// ```
#[derive(Clone, Default)]
pub struct FnRecord {
    value_of: Option<Callable>,
    display: Option<Callable>,
}

impl FnRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value_of<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<Value, Error> + Send + Sync + 'static,
    {
        self.value_of = Some(Callable::new(f));
        self
    }

    pub fn with_display<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<Value, Error> + Send + Sync + 'static,
    {
        self.display = Some(Callable::new(f));
        self
    }

    pub fn into_value(self) -> Value {
        Value::record(self)
    }
}

impl fmt::Debug for FnRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRecord")
            .field("value_of", &self.value_of.is_some())
            .field("display", &self.display.is_some())
            .finish()
    }
}

impl Record for FnRecord {
    fn value_of(&self) -> Option<Result<Value, Error>> {
        self.value_of.as_ref().map(Callable::call)
    }

    fn display(&self) -> Option<Result<Value, Error>> {
        self.display.as_ref().map(Callable::call)
    }
}
