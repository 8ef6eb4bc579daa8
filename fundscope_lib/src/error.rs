//! Error types for the library layer.

use std::fmt;

use crate::source::SourceError;

/// Errors produced by the library layer. Per-line decode failures are not
/// errors; they are counted in the parse report.
#[derive(Debug)]
pub enum FundscopeError {
    /// The record source could not be read.
    Source(SourceError),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// A background parse task panicked or was cancelled.
    Task(String),
}

impl fmt::Display for FundscopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "Source error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Task(msg) => write!(f, "Parse task failed: {}", msg),
        }
    }
}

impl std::error::Error for FundscopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SourceError> for FundscopeError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn source_errors_keep_their_cause() {
        let err: FundscopeError = SourceError::HttpStatus {
            url: "https://example.com/weball24.txt".to_string(),
            status: 404,
        }
        .into();
        assert!(err.to_string().starts_with("Source error: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn invalid_input_has_no_cause() {
        let err = FundscopeError::InvalidInput("state is empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: state is empty");
        assert!(err.source().is_none());
    }
}
