#![forbid(unsafe_code)]

//! Turning posts into ticker items.
//!
//! [`RenderItem`] is the seam; [`TextRenderer`] renders a post as a single
//! line of terminal text:
//!
//! ```text
//! @ann: shipping https://example.com/r #rust · Wed Aug 27 2008
//! ```
//!
//! URLs, `@mentions` and `#hashtags` become inline link regions, so a click
//! on them is treated as a click on a link element rather than on the post.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex_lite::Regex;
use ticker_core::{InlineLink, Item, ItemId};
use unicode_width::UnicodeWidthStr;

use crate::post::Post;

/// Timestamp layout of `Post::created_at`.
pub const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<url>[A-Za-z]+://[A-Za-z0-9_-]+\.[A-Za-z0-9_:%&~?/.=-]+)|(?P<mention>@+[A-Za-z0-9_]+)|(?P<tag>#+[A-Za-z0-9_]+)",
    )
    .expect("link regex")
});

/// Builds the item shown for one post.
pub trait RenderItem {
    fn render(&mut self, id: ItemId, post: &Post) -> Item;
}

impl<F> RenderItem for F
where
    F: FnMut(ItemId, &Post) -> Item,
{
    fn render(&mut self, id: ItemId, post: &Post) -> Item {
        self(id, post)
    }
}

/// Single-line text renderer measuring items by display width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRenderer {
    item_width: Option<u32>,
    margin: u32,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            item_width: None,
            margin: 2,
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give every item the same content width instead of measuring it.
    #[must_use]
    pub fn fixed_width(mut self, width: Option<u32>) -> Self {
        self.item_width = width;
        self
    }

    /// Margin added on both sides of every item.
    #[must_use]
    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// The rendered line for `post`.
    pub fn line(&self, post: &Post) -> String {
        let mut line = String::new();
        if let Some(user) = post.user.as_ref().filter(|u| !u.screen_name.is_empty()) {
            line.push('@');
            line.push_str(&user.screen_name);
            line.push_str(": ");
        }
        line.extend(
            post.text
                .chars()
                .map(|c| if c.is_control() { ' ' } else { c }),
        );
        let date = format_date(&post.created_at);
        if !date.is_empty() {
            line.push_str(" · ");
            line.push_str(&date);
        }
        line
    }
}

impl RenderItem for TextRenderer {
    fn render(&mut self, id: ItemId, post: &Post) -> Item {
        let line = self.line(post);
        let width = self
            .item_width
            .unwrap_or_else(|| u32::try_from(line.width()).unwrap_or(u32::MAX));
        let links = detect_links(&line);
        let mut item = Item::new(id, line, width)
            .with_margin(self.margin, self.margin)
            .with_links(links);
        if let Some(url) = post.url.as_deref().filter(|u| !u.is_empty()) {
            item = item.with_url(url);
        }
        item
    }
}

/// `Wed Aug 27 13:08:45 +0000 2008` becomes `Wed Aug 27 2008`, in UTC.
/// Empty or unparseable input yields an empty string.
pub fn format_date(created_at: &str) -> String {
    let raw = created_at.trim();
    if raw.is_empty() {
        return String::new();
    }
    match DateTime::parse_from_str(raw, CREATED_AT_FORMAT) {
        Ok(at) => at.with_timezone(&Utc).format("%a %b %d %Y").to_string(),
        Err(err) => {
            tracing::debug!(created_at = raw, error = %err, "render.bad_date");
            String::new()
        }
    }
}

/// Inline link regions of `text`, in display-width columns.
pub fn detect_links(text: &str) -> Vec<InlineLink> {
    LINK_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let (whole, href) = if let Some(m) = caps.name("url") {
                (m, m.as_str().to_owned())
            } else if let Some(m) = caps.name("mention") {
                let name = m.as_str().trim_start_matches('@');
                (m, format!("http://twitter.com/{name}"))
            } else {
                let m = caps.name("tag")?;
                let tag = m.as_str().trim_start_matches('#');
                (m, format!("http://twitter.com/search?q={tag}"))
            };
            let start = text[..whole.start()].width();
            let end = start + whole.as_str().width();
            Some(InlineLink::new(
                u32::try_from(start).ok()?,
                u32::try_from(end).ok()?,
                href,
            ))
        })
        .collect()
}
