#![forbid(unsafe_code)]

use thiserror::Error;
use ticker_core::ConfigError;
use ticker_timeline::TimelineError;

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("timeline error: {0}")]
    Timeline(#[from] TimelineError),

    #[error("could not load posts: {message}")]
    Fetch { message: String },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("logging setup failed: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DemoError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } => 2,
            Self::Fetch { .. } => 3,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DemoError;

    #[test]
    fn invalid_argument_exits_with_two() {
        let error = DemoError::invalid("frame-ms must be > 0");
        assert_eq!(error.exit_code(), 2);
        assert_eq!(error.to_string(), "invalid argument: frame-ms must be > 0");
    }

    #[test]
    fn fetch_failure_exits_with_three() {
        let error = DemoError::Fetch {
            message: "io: missing".into(),
        };
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn config_errors_use_default_code() {
        let error = DemoError::from(ticker_core::ConfigError::Validation(vec!["x".into()]));
        assert_eq!(error.exit_code(), 1);
    }
}
