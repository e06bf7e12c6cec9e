#![forbid(unsafe_code)]

//! Error types for ticker construction and configuration loading.

use thiserror::Error;

/// Errors raised by track construction and ticker operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TickerError {
    /// A track needs at least one item to loop.
    #[error("cannot build a ticker track from an empty item sequence")]
    EmptyInput,
    /// The ticker was stopped and cannot be restarted.
    #[error("ticker {index} was torn down")]
    TornDown {
        /// Lane index of the ticker.
        index: usize,
    },
}

pub type Result<T> = std::result::Result<T, TickerError>;

/// Errors that can occur when loading a ticker configuration.
#[cfg(feature = "config")]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parse error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Validation errors.
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_message() {
        assert_eq!(
            TickerError::EmptyInput.to_string(),
            "cannot build a ticker track from an empty item sequence"
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn validation_errors_are_joined() {
        let err = ConfigError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "validation errors: a; b");
    }
}
