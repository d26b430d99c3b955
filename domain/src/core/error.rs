//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid composite model id: {0}")]
    InvalidModelId(String),

    #[error("Unknown spread: {0}")]
    UnknownSpread(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Invalid clarification (expected QUESTION=ANSWER): {0}")]
    InvalidClarification(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_model_id_display() {
        let error = DomainError::InvalidModelId("no-slash".to_string());
        assert_eq!(error.to_string(), "Invalid composite model id: no-slash");
    }

    #[test]
    fn test_unknown_spread_display() {
        let error = DomainError::UnknownSpread("hexad".to_string());
        assert_eq!(error.to_string(), "Unknown spread: hexad");
    }
}
