//! Error handling types for quadhash
//!
//! This module provides the error type shared by the digest pipeline,
//! configuration loading and the command-line front end.

use thiserror::Error;

/// Comprehensive error type for digest operations
#[derive(Debug, Error)]
pub enum DigestError {
    /// The leading quadratic coefficient is zero, so `2a` cannot divide
    #[error("Degenerate input: leading coefficient is zero (a={a}, b={b}, c={c})")]
    DegenerateInput { a: i64, b: i64, c: i64 },

    /// Text that should hold a digest is not 16 hex digits
    #[error("Invalid digest: {text:?} is not 16 hexadecimal digits")]
    InvalidDigest { text: String },

    /// Configuration error
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// JSON rendering of a trace failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for digest operations
pub type DigestResult<T> = Result<T, DigestError>;

/// The only way the quadratic stage can fail: `2a` wraps to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("leading coefficient is zero (a={a}, b={b}, c={c})")]
pub struct DegenerateQuadratic {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl From<DegenerateQuadratic> for DigestError {
    fn from(DegenerateQuadratic { a, b, c }: DegenerateQuadratic) -> Self {
        DigestError::degenerate(a, b, c)
    }
}

/// Helper functions for common error patterns
impl DigestError {
    /// Create a degenerate input error from the offending coefficients
    pub fn degenerate(a: i64, b: i64, c: i64) -> Self {
        DigestError::DegenerateInput { a, b, c }
    }

    /// Create an invalid digest error
    pub fn invalid_digest(text: impl Into<String>) -> Self {
        DigestError::InvalidDigest { text: text.into() }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        DigestError::Config {
            message: message.into(),
        }
    }

    /// Whether this error came from the degenerate quadratic case.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, DigestError::DegenerateInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_error_message_names_coefficients() {
        let err = DigestError::degenerate(0, 9, 7);
        assert!(err.is_degenerate());
        assert_eq!(
            err.to_string(),
            "Degenerate input: leading coefficient is zero (a=0, b=9, c=7)"
        );
    }

    #[test]
    fn test_degenerate_quadratic_converts_to_degenerate_input() {
        let err: DigestError = DegenerateQuadratic { a: 0, b: 4, c: 2 }.into();
        assert!(matches!(err, DigestError::DegenerateInput { a: 0, b: 4, c: 2 }));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: DigestError = io.into();
        assert!(!err.is_degenerate());
        assert!(err.to_string().starts_with("IO error:"));
    }
}
