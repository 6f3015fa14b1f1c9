use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Text a record without its own display renders as natively.
pub const DEFAULT_PLACEHOLDER: &str = "[object Object]";

/// Conversion settings.
///
/// JSON format: `{"placeholder": "[object Object]", "radix_literals": true}`.
/// Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Display-accessor text that `stringify` treats as "no display".
    pub placeholder: String,
    /// Accept `0x`, `0o` and `0b` prefixed strings as numbers.
    pub radix_literals: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            radix_literals: true,
        }
    }
}

impl Options {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json)
            .map_err(|e| Error::new(format!("Invalid options JSON: {}", e), None))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::new(format!("Failed to read options: {}", e), Some(path.display().to_string()))
        })?;
        Self::from_json(&raw).map_err(|e| e.with_context(path.display().to_string()))
    }
}

lazy_static::lazy_static! {
    pub(crate) static ref DEFAULT_OPTIONS: Options = Options::default();
}
