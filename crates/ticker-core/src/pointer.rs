#![forbid(unsafe_code)]

//! Pointer input routed to a ticker strip.

use crate::item::ItemId;

/// Pointer events the strip listens for while started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer entered the strip's viewport.
    Enter,
    /// Pointer left the strip's viewport.
    Leave,
    /// Primary click at column `x` of lane `lane`'s viewport.
    Click { lane: usize, x: u32 },
}

/// The item under a click, resolved against the track's current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickTarget {
    pub lane: usize,
    pub item: ItemId,
    /// External link of the item, if it carries one.
    pub url: Option<String>,
    /// The click landed on an inline link element inside the item.
    pub on_link: bool,
}

impl ClickTarget {
    /// What a click on this target does, without performing it.
    pub fn outcome(&self) -> ClickOutcome {
        if self.on_link {
            return ClickOutcome::OnLink;
        }
        match &self.url {
            Some(url) => ClickOutcome::Opened(url.clone()),
            None => ClickOutcome::NoUrl,
        }
    }
}

/// Result of routing a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The item's link was opened in a new browsing context.
    Opened(String),
    /// The click hit an inline link; that element handles navigation itself.
    OnLink,
    /// The item carries no link.
    NoUrl,
    /// Nothing was under the pointer, or the strip is not listening.
    Missed,
}
