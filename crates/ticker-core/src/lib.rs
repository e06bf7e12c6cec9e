#![forbid(unsafe_code)]

//! Core: auto-scrolling ticker tracks.
//!
//! # Role in the workspace
//! `ticker-core` owns the scrolling model. A [`Track`] is an ordered strip of
//! fixed-width [`Item`]s inside a viewport; a [`Ticker`] owns one track plus
//! its [`ScrollState`] and advances it on a repeating timer, recycling the
//! front item to the back once it has scrolled fully out of view. A
//! [`TickerStrip`] groups several tickers and delegates hover (pause/resume)
//! and click (open the item's link) to them.
//!
//! # Time
//! Nothing here blocks or spawns threads. Timers are registered with a
//! [`Scheduler`]; the host decides when they fire. [`DeterministicScheduler`]
//! is a host-advanced virtual clock that makes every test reproducible.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use ticker_core::{DeterministicScheduler, Item, ItemId, TickerConfig, TickerStrip};
//!
//! let config = TickerConfig::default();
//! let mut strip = TickerStrip::new(DeterministicScheduler::new(), config.clone());
//! strip.push_lane(vec![
//!     Item::new(ItemId(0), "first", 100),
//!     Item::new(ItemId(1), "second", 80),
//! ]);
//! strip.start();
//! strip.advance(Duration::from_millis(200));
//! assert_eq!(strip.tickers()[0].state().position, 10);
//! ```

pub mod config;
pub mod error;
pub mod item;
pub mod pointer;
pub mod scroll;
pub mod strip;
pub mod ticker;
pub mod timer;
pub mod track;

pub use config::TickerConfig;
#[cfg(feature = "config")]
pub use error::ConfigError;
pub use error::{Result, TickerError};
pub use item::{InlineLink, Item, ItemId};
pub use pointer::{ClickOutcome, ClickTarget, PointerEvent};
pub use scroll::{ScrollState, TickStats, TickerPhase};
pub use strip::{LinkOpener, TickerStrip};
pub use ticker::{Swap, Ticker};
pub use timer::{DeterministicScheduler, Scheduler, TimerId};
pub use track::{Track, VisibleItem};
