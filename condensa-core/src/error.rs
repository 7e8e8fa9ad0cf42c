//! Errors for the psychrometric core

use thiserror::Error;

pub type PsychroResult<T> = Result<T, PsychroError>;

/// Errors raised by the calculation core
///
/// Every error is terminal for the calculation attempt that produced it.
/// The core never retries; the caller decides whether to re-prompt.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PsychroError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),
}

impl PsychroError {
    /// Shorthand used by the validators
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PsychroError::InvalidInput("relative humidity must be > 0".into());
        assert_eq!(
            err.to_string(),
            "Invalid input: relative humidity must be > 0"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let err = PsychroError::OutOfRange("samples".into());
        assert!(err.to_string().starts_with("Out of range"));
    }

    #[test]
    fn test_invalid_helper() {
        assert_eq!(
            PsychroError::invalid("x"),
            PsychroError::InvalidInput("x".to_string())
        );
    }
}
