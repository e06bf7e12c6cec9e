#![forbid(unsafe_code)]

//! Timeline widget: posts rendered into staggered auto-scrolling lanes.
//!
//! The widget fetches posts through a [`FetchItems`] source, renders each one
//! with a [`RenderItem`], splits the items into lanes (three by default) and
//! hands every lane to a [`ticker_core::TickerStrip`]. Hovering the widget
//! pauses all lanes; clicking a post opens its permalink unless the click
//! landed on an inline link.

pub mod config;
pub mod error;
pub mod partition;
pub mod post;
pub mod render;
pub mod source;
pub mod widget;

pub use config::TimelineConfig;
pub use error::{Result, TimelineError};
pub use partition::partition_lanes;
pub use post::{ErrorPayload, FetchResponse, Post, PostAuthor};
pub use render::{RenderItem, TextRenderer, detect_links, format_date};
pub use source::{FetchItems, JsonFileSource, StaticSource};
pub use widget::{TimelineState, TimelineWidget};
