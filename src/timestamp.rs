use crate::error::Error;
use crate::traits::Record;
use crate::types::Value;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A UTC instant exposed as a record.
///
/// The value accessor gives epoch milliseconds; the display accessor gives
/// text such as `"Tue Jan 01 2030 00:00:00 GMT+0000"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn new(at: DateTime<Utc>) -> Self {
        Timestamp(at)
    }

    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    pub fn from_millis(millis: i64) -> Result<Self, Error> {
        DateTime::from_timestamp_millis(millis)
            .map(Timestamp)
            .ok_or_else(|| Error::new("Invalid timestamp", Some(millis.to_string())))
    }

    pub fn millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Record for Timestamp {
    fn value_of(&self) -> Option<Result<Value, Error>> {
        Some(Ok(Value::Number(self.millis() as f64)))
    }

    fn display(&self) -> Option<Result<Value, Error>> {
        Some(Ok(Value::String(
            self.0.format("%a %b %d %Y %H:%M:%S GMT+0000").to_string(),
        )))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(at: DateTime<Utc>) -> Self {
        Value::record(Timestamp(at))
    }
}
