#![forbid(unsafe_code)]

//! Renderable ticker items.
//!
//! An [`Item`] is opaque to the scrolling model apart from its geometry: a
//! content width plus horizontal margins, fixed once the item is built. The
//! scroller only ever reads [`Item::outer_width`].

use std::fmt;

/// Stable identity of an item within a strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A link region embedded in an item's content.
///
/// `start..end` is measured in width units from the left edge of the content
/// box (margins excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineLink {
    pub start: u32,
    pub end: u32,
    pub href: String,
}

impl InlineLink {
    pub fn new(start: u32, end: u32, href: impl Into<String>) -> Self {
        Self {
            start,
            end: end.max(start),
            href: href.into(),
        }
    }

    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        (self.start..self.end).contains(&offset)
    }
}

/// A laid-out unit of a ticker track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    content: String,
    width: u32,
    margin_left: u32,
    margin_right: u32,
    url: Option<String>,
    links: Vec<InlineLink>,
}

impl Item {
    /// Create an item with the given content width and no margins.
    pub fn new(id: ItemId, content: impl Into<String>, width: u32) -> Self {
        Self {
            id,
            content: content.into(),
            width,
            margin_left: 0,
            margin_right: 0,
            url: None,
            links: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_margin(mut self, left: u32, right: u32) -> Self {
        self.margin_left = left;
        self.margin_right = right;
        self
    }

    /// Attach the external link opened when the item is clicked.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_link(mut self, link: InlineLink) -> Self {
        self.links.push(link);
        self
    }

    #[must_use]
    pub fn with_links(mut self, links: impl IntoIterator<Item = InlineLink>) -> Self {
        self.links.extend(links);
        self
    }

    pub const fn id(&self) -> ItemId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content width, margins excluded.
    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn margin_left(&self) -> u32 {
        self.margin_left
    }

    pub const fn margin_right(&self) -> u32 {
        self.margin_right
    }

    /// Width including margins. This is the distance the strip shifts when
    /// the item is recycled.
    pub const fn outer_width(&self) -> u64 {
        self.width as u64 + self.margin_left as u64 + self.margin_right as u64
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn links(&self) -> &[InlineLink] {
        &self.links
    }

    /// Returns the inline link under `offset`, measured from the item's outer
    /// left edge. Offsets in the margins never hit a link.
    pub fn link_at(&self, offset: u32) -> Option<&InlineLink> {
        let inner = offset.checked_sub(self.margin_left)?;
        if inner >= self.width {
            return None;
        }
        self.links.iter().find(|link| link.contains(inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_width_includes_margins() {
        let item = Item::new(ItemId(1), "x", 100).with_margin(4, 6);
        assert_eq!(item.width(), 100);
        assert_eq!(item.outer_width(), 110);
    }

    #[test]
    fn outer_width_does_not_overflow_u32() {
        let item = Item::new(ItemId(1), "", u32::MAX).with_margin(u32::MAX, 1);
        assert_eq!(item.outer_width(), 2 * u32::MAX as u64 + 1);
    }

    #[test]
    fn link_at_skips_margins() {
        let item = Item::new(ItemId(7), "see @bob", 8)
            .with_margin(2, 2)
            .with_link(InlineLink::new(4, 8, "http://twitter.com/bob"));
        assert!(item.link_at(0).is_none());
        assert!(item.link_at(5).is_none());
        assert_eq!(
            item.link_at(6).map(|l| l.href.as_str()),
            Some("http://twitter.com/bob")
        );
        assert!(item.link_at(9).is_some());
        assert!(item.link_at(10).is_none());
    }

    #[test]
    fn inverted_link_range_is_empty() {
        let link = InlineLink::new(5, 2, "x");
        assert_eq!(link.end, 5);
        assert!(!link.contains(5));
    }

    #[test]
    fn item_id_display() {
        assert_eq!(ItemId(42).to_string(), "#42");
    }
}
