#![forbid(unsafe_code)]

use thiserror::Error;
use ticker_core::ConfigError;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("timeline configuration: {0}")]
    Config(#[from] ConfigError),
    /// `start` was called on a widget that has already been stopped.
    #[error("timeline widget was stopped and cannot be restarted")]
    Stopped,
}

pub type Result<T> = std::result::Result<T, TimelineError>;
