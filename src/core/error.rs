//! Helper error types
//!
//! Handlers themselves never fail: absent or ill-shaped input is a silent
//! per-call no-op. These errors cover the registration-time API surface
//! and the typed views over host JSON.

use thiserror::Error;

/// Errors that can occur while wiring or feeding hooks
#[derive(Error, Debug)]
pub enum HelperError {
    /// Invalid form-id pattern supplied to a matcher
    #[error("Invalid form pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for helper operations
pub type HelperResult<T> = Result<T, HelperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: HelperError = regex::Regex::new("(").unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid form pattern:"));
    }

    #[test]
    fn test_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let helper_err: HelperError = json_err.into();
        assert!(matches!(helper_err, HelperError::Serialization(_)));
    }
}
