//! Logger setup errors.

use thiserror::Error;

/// Result alias for logger setup.
pub type LogResult<T> = Result<T, LogError>;

/// Errors raised while configuring or installing the subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    /// The level directive string could not be parsed.
    #[error("Invalid filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },

    /// A format name outside `pretty`, `compact` and `json`.
    #[error("Unknown log format: {name}")]
    UnknownFormat { name: String },

    /// A global subscriber was already installed.
    #[error("Logger initialization failed: {0}")]
    Init(String),
}

impl LogError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Filter { .. } => "LOG_FILTER",
            Self::UnknownFormat { .. } => "LOG_FORMAT",
            Self::Init(_) => "LOG_INIT",
        }
    }

    pub const fn category(&self) -> &'static str {
        match self {
            Self::Filter { .. } | Self::UnknownFormat { .. } => "config",
            Self::Init(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_messages() {
        let err = LogError::Filter {
            filter: "a=loud".into(),
            reason: "invalid level".into(),
        };
        assert_eq!(err.code(), "LOG_FILTER");
        assert_eq!(err.category(), "config");
        assert_eq!(err.to_string(), "Invalid filter 'a=loud': invalid level");

        let err = LogError::Init("already set".into());
        assert_eq!(err.category(), "internal");
    }
}
