use std::any::Any;
use std::fmt;

use crate::status_code::StatusCode;

/// Extension trait implemented by every error enum in the workspace.
pub trait ErrorExt: std::error::Error {
    /// Classification of this error.
    fn status_code(&self) -> StatusCode {
        StatusCode::Unknown
    }

    /// Downcast hook for callers holding a `dyn ErrorExt`.
    fn as_any(&self) -> &dyn Any;

    fn is_retryable(&self) -> bool {
        self.status_code().is_retryable()
    }

    /// Message safe to surface to the model or the user.
    ///
    /// Internal failures only expose their numeric code.
    fn output_msg(&self) -> String
    where
        Self: Sized,
    {
        match self.status_code() {
            StatusCode::Unknown | StatusCode::Internal => {
                format!("Internal error: {}", self.status_code() as i32)
            }
            _ => self.to_string(),
        }
    }
}

/// An error carrying only a message and a status code.
#[derive(Debug, Clone)]
pub struct PlainError {
    msg: String,
    status_code: StatusCode,
}

impl PlainError {
    pub fn new(msg: impl Into<String>, status_code: StatusCode) -> Self {
        Self {
            msg: msg.into(),
            status_code,
        }
    }
}

impl fmt::Display for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.msg)
    }
}

impl std::error::Error for PlainError {}

impl ErrorExt for PlainError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Wraps a foreign error with a status code.
#[derive(Debug)]
pub struct BoxedError {
    inner: Box<dyn std::error::Error + Send + Sync>,
    status_code: StatusCode,
}

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for BoxedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl ErrorExt for BoxedError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Box `err` and attach `status_code`.
pub fn boxed<E>(err: E, status_code: StatusCode) -> BoxedError
where
    E: std::error::Error + Send + Sync + 'static,
{
    BoxedError {
        inner: Box::new(err),
        status_code,
    }
}

#[cfg(test)]
#[path = "ext.test.rs"]
mod tests;
