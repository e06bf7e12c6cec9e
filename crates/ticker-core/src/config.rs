#![forbid(unsafe_code)]

//! Tunable ticker parameters.
//!
//! ```toml
//! tick_interval_ms = 20
//! step = 1
//! stagger_step = 180
//! viewport_width = 600
//! ```
//!
//! Every field has a default, so a partial file only overrides what it
//! names and `TickerConfig::default()` reproduces the built-in behavior:
//! one unit every 20 ms (50 units per second), lanes staggered by 180.

#[cfg(feature = "config")]
use std::path::Path;
use std::time::Duration;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "config")]
use crate::error::ConfigError;

/// Largest accepted `stagger_step`.
pub const MAX_STAGGER_STEP: u64 = u32::MAX as u64;

/// Timing and geometry shared by every ticker of a strip.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct TickerConfig {
    /// Milliseconds between ticks. Default: 20.
    pub tick_interval_ms: u64,
    /// Position increase per tick. Default: 1.
    pub step: u64,
    /// Start offset added per lane index. Default: 180.
    pub stagger_step: u64,
    /// Visible width of each track's viewport. Default: 600.
    pub viewport_width: u32,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 20,
            step: 1,
            stagger_step: 180,
            viewport_width: 600,
        }
    }
}

impl TickerConfig {
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Start offset of the ticker at lane `index`.
    pub const fn start_offset(&self, index: usize) -> u64 {
        (index as u64).saturating_mul(self.stagger_step)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.tick_interval_ms == 0 {
            errors.push("tick_interval_ms must be > 0".into());
        }
        if self.step == 0 {
            errors.push("step must be > 0".into());
        }
        if self.viewport_width == 0 {
            errors.push("viewport_width must be > 0".into());
        }
        if self.stagger_step > MAX_STAGGER_STEP {
            errors.push(format!("stagger_step must be <= {MAX_STAGGER_STEP}"));
        }
        errors
    }

    /// Load from a TOML string and validate.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    /// Load from a TOML file on disk and validate.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string and validate.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validated()
    }

    #[cfg(feature = "config")]
    fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}
