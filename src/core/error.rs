//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A handler was already installed in the slot
    #[error("Log handler already set")]
    HandlerAlreadySet,

    /// Unrecognized level name
    #[error("Invalid log level: '{value}'")]
    InvalidLevel { value: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(value: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            value: value.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_level("verbose");
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));

        let err = LoggerError::config("RLOG_LEVEL", "unknown level");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LoggerError::HandlerAlreadySet.to_string(),
            "Log handler already set"
        );
        assert_eq!(
            LoggerError::invalid_level("verbose").to_string(),
            "Invalid log level: 'verbose'"
        );
        assert_eq!(
            LoggerError::config("RLOG_LEVEL", "unknown level 'loud'").to_string(),
            "Invalid configuration for RLOG_LEVEL: unknown level 'loud'"
        );
    }
}
