use std::fmt::{Display, Formatter};

/// Failure raised by caller-supplied code (a callable or a record accessor)
/// or by options loading. Conversions never produce one on their own.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub message: String,
    pub context: Option<String>,
}

impl Error {
    pub fn new<M: Into<String>>(message: M, context: Option<String>) -> Self {
        Self { message: message.into(), context }
    }

    pub fn with_context<C: Into<String>>(mut self, context: C) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.context {
            Some(ctx) => write!(f, "{} ({})", self.message, ctx),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for Error {}
