#![forbid(unsafe_code)]

//! Ordered strip of items inside a fixed-width viewport.
//!
//! # Invariants
//!
//! 1. A track is never empty; [`Track::create`] rejects empty input.
//! 2. Recycling moves the front item to the back, so cardinality and the
//!    total content width never change.
//! 3. Geometry is read-only: items are laid out left-to-right with no gaps
//!    other than their own margins.

use std::collections::VecDeque;

use crate::error::{Result, TickerError};
use crate::item::{Item, ItemId};

/// An item positioned relative to the viewport's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleItem<'a> {
    pub item: &'a Item,
    /// Left edge of the item's outer box. Negative when the item is partly
    /// scrolled out on the left.
    pub x: i64,
}

impl VisibleItem<'_> {
    #[inline]
    pub fn right(&self) -> i64 {
        self.x + self.item.outer_width() as i64
    }
}

#[derive(Debug, Clone)]
pub struct Track {
    items: VecDeque<Item>,
    viewport_width: u32,
    content_width: u64,
}

impl Track {
    /// Lay out `items` left-to-right in a viewport `viewport_width` wide.
    pub fn create(items: impl IntoIterator<Item = Item>, viewport_width: u32) -> Result<Self> {
        let items: VecDeque<Item> = items.into_iter().collect();
        if items.is_empty() {
            return Err(TickerError::EmptyInput);
        }
        let content_width = items.iter().map(Item::outer_width).sum();
        tracing::debug!(
            items = items.len(),
            content_width,
            viewport_width,
            "track.create"
        );
        Ok(Self {
            items,
            viewport_width,
            content_width,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false` for a constructed track.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub const fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// Sum of every item's outer width.
    pub const fn content_width(&self) -> u64 {
        self.content_width
    }

    pub fn front(&self) -> Option<&Item> {
        self.items.front()
    }

    /// Current left-to-right order of item ids.
    pub fn order(&self) -> Vec<ItemId> {
        self.items.iter().map(Item::id).collect()
    }

    /// Detach the front item and append it to the back. Returns the moved
    /// item.
    pub(crate) fn recycle_front(&mut self) -> Option<&Item> {
        let front = self.items.pop_front()?;
        self.items.push_back(front);
        self.items.back()
    }

    /// Items intersecting the viewport when scrolled to `position`.
    ///
    /// The strip is treated as an endless repetition of its current order,
    /// so a position past the content width wraps around instead of showing
    /// blank space.
    pub fn visible(&self, position: u64) -> Vec<VisibleItem<'_>> {
        let mut out = Vec::new();
        if self.content_width == 0 || self.viewport_width == 0 {
            return out;
        }
        let start = position % self.content_width;
        let end = start + u64::from(self.viewport_width);
        let mut left = 0u64;
        'cycles: loop {
            for item in &self.items {
                if left >= end {
                    break 'cycles;
                }
                let right = left + item.outer_width();
                if right > start {
                    out.push(VisibleItem {
                        item,
                        x: left as i64 - start as i64,
                    });
                }
                left = right;
            }
        }
        out
    }

    /// Hit-test viewport column `x` at scroll `position`. Returns the item
    /// and the offset from its outer left edge.
    pub fn item_at(&self, position: u64, x: u32) -> Option<(&Item, u32)> {
        if x >= self.viewport_width {
            return None;
        }
        let px = i64::from(x);
        self.visible(position)
            .into_iter()
            .find(|v| v.x <= px && px < v.right())
            .map(|v| (v.item, (px - v.x) as u32))
    }
}
