pub mod config;
pub mod convert;
pub mod error;
pub mod json;
pub mod timestamp;
pub mod traits;
pub mod types;

pub use config::{Options, DEFAULT_PLACEHOLDER};
pub use error::Error;
pub use json::{value_from_json, JsonRecord};
pub use timestamp::Timestamp;
pub use traits::{FnRecord, Record};
pub use types::{Callable, Value};

use config::DEFAULT_OPTIONS;

/// Strictly convert a value to a finite number, or `None`.
///
/// ```rust
/// use strictify::numberify;
///
/// assert_eq!(numberify("2 ").unwrap(), Some(2.0));
/// assert_eq!(numberify("2a").unwrap(), None);
/// assert_eq!(numberify(f64::NAN).unwrap(), None);
/// assert_eq!(numberify(true).unwrap(), Some(1.0));
/// ```
pub fn numberify<V: Into<Value>>(input: V) -> Result<Option<f64>, Error> {
    convert::numberify_with(&input.into(), &DEFAULT_OPTIONS)
}

/// Strictly convert a value to a boolean, or `None`.
///
/// ```rust
/// use strictify::booleanify;
///
/// assert_eq!(booleanify("1").unwrap(), Some(true));
/// assert_eq!(booleanify(0).unwrap(), Some(false));
/// assert_eq!(booleanify(2).unwrap(), None);
/// ```
pub fn booleanify<V: Into<Value>>(input: V) -> Result<Option<bool>, Error> {
    convert::booleanify_with(&input.into())
}

/// Strictly convert a value to a string, or `None`.
///
/// ```rust
/// use strictify::stringify;
///
/// assert_eq!(stringify(3.5).unwrap(), Some("3.5".to_string()));
/// assert_eq!(stringify(true).unwrap(), Some("1".to_string()));
/// assert_eq!(stringify(f64::NAN).unwrap(), None);
/// ```
pub fn stringify<V: Into<Value>>(input: V) -> Result<Option<String>, Error> {
    convert::stringify_with(&input.into(), &DEFAULT_OPTIONS)
}

/// Conversions bound to non-default [`Options`].
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: Options,
}

impl Converter {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn numberify<V: Into<Value>>(&self, input: V) -> Result<Option<f64>, Error> {
        convert::numberify_with(&input.into(), &self.options)
    }

    pub fn booleanify<V: Into<Value>>(&self, input: V) -> Result<Option<bool>, Error> {
        convert::booleanify_with(&input.into())
    }

    pub fn stringify<V: Into<Value>>(&self, input: V) -> Result<Option<String>, Error> {
        convert::stringify_with(&input.into(), &self.options)
    }
}
