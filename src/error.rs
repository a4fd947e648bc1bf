//! Error types for a3s-cron-describe

use thiserror::Error;

/// Errors that can occur while decoding cron expressions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronError {
    /// Expression does not satisfy the cron field grammar
    #[error("Invalid cron expression: {0}")]
    InvalidExpression(String),

    /// Positional field index outside the five cron fields
    #[error("Invalid field index: {0}")]
    InvalidFieldIndex(usize),

    /// Token starting with `@` that is not a known shortcut
    #[error("Unknown special expression: {0}")]
    UnknownSpecial(String),
}

/// Result type alias for cron operations
pub type Result<T> = std::result::Result<T, CronError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CronError::InvalidExpression("minute: '60' out of range".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid cron expression: minute: '60' out of range"
        );
        assert_eq!(
            CronError::InvalidFieldIndex(5).to_string(),
            "Invalid field index: 5"
        );
        assert_eq!(
            CronError::UnknownSpecial("@never".to_string()).to_string(),
            "Unknown special expression: @never"
        );
    }
}
