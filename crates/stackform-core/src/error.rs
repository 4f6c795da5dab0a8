//! Error types for the Stackform core.

/// Core error type for Stackform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StackformError {
    /// Invalid AWS account ID format.
    #[error("invalid AWS account ID: {0} (must be 12-digit numeric string)")]
    InvalidAccountId(String),

    /// Malformed AWS region identifier.
    #[error("invalid AWS region: {0}")]
    InvalidRegion(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_format_error_messages() {
        assert_eq!(
            StackformError::InvalidAccountId("42".to_owned()).to_string(),
            "invalid AWS account ID: 42 (must be 12-digit numeric string)"
        );
        assert_eq!(
            StackformError::InvalidRegion("mars".to_owned()).to_string(),
            "invalid AWS region: mars"
        );
    }

    #[test]
    fn test_should_compare_errors_by_value() {
        let err = crate::AwsRegion::parse("mars").unwrap_err();
        assert_eq!(err, StackformError::InvalidRegion("mars".to_owned()));
        assert_ne!(err, StackformError::Config("mars".to_owned()));
    }
}
