//! Domain error types

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Path has no final file name component (e.g. `/` or `..`)
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::InvalidPath("/".to_string());
        assert_eq!(err.to_string(), "Invalid path: /");
    }

    #[test]
    fn test_error_equality() {
        let err1 = DomainError::InvalidPath("..".to_string());
        let err2 = DomainError::InvalidPath("..".to_string());
        let err3 = DomainError::InvalidPath("/".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
