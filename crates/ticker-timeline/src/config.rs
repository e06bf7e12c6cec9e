#![forbid(unsafe_code)]

//! Timeline widget configuration.
//!
//! ```toml
//! lanes = 3
//! item_margin = 2
//! # item_width = 48
//!
//! [ticker]
//! tick_interval_ms = 20
//! viewport_width = 80
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use ticker_core::{ConfigError, TickerConfig};

use crate::render::TextRenderer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Number of scrolling lanes. Default: 3.
    pub lanes: usize,
    /// Fixed content width for every item; measured from the text when unset.
    pub item_width: Option<u32>,
    /// Margin on each side of every item. Default: 2.
    pub item_margin: u32,
    pub ticker: TickerConfig,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            lanes: 3,
            item_width: None,
            item_margin: 2,
            ticker: TickerConfig::default(),
        }
    }
}

impl TimelineConfig {
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors: Vec<String> = self
            .ticker
            .validate()
            .into_iter()
            .map(|e| format!("ticker.{e}"))
            .collect();
        if self.lanes == 0 {
            errors.push("lanes must be > 0".into());
        }
        if self.item_width == Some(0) {
            errors.push("item_width must be > 0 when set".into());
        }
        errors
    }

    /// Text renderer honoring `item_width` and `item_margin`.
    pub fn text_renderer(&self) -> TextRenderer {
        TextRenderer::new()
            .fixed_width(self.item_width)
            .margin(self.item_margin)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}
