#![forbid(unsafe_code)]

//! A single auto-scrolling track.
//!
//! # Swap algorithm
//!
//! Every tick while running:
//!
//! 1. If no swap threshold is cached, measure the front item's outer width
//!    and cache it.
//! 2. If `position >= threshold`, move the front item to the back and
//!    subtract its outer width from `position`. The rendered content shifts
//!    left by exactly that width, so the visible frame does not jump. The
//!    cache is cleared and the new front item is measured on the next tick.
//! 3. Otherwise nothing changes structurally.
//!
//! # Invariants
//!
//! 1. The track's cardinality never changes.
//! 2. `position` only grows while running, except for the compensating
//!    decrement on swap.
//! 3. One width measurement per recycle cycle (`stats.measurements` is at
//!    most `stats.swaps + 1`).
//! 4. A timer firing for any handle other than the current one is ignored,
//!    so a pause always wins over a firing that was already queued.

use std::time::Duration;

use crate::config::TickerConfig;
use crate::error::{Result, TickerError};
use crate::item::{Item, ItemId};
use crate::pointer::ClickTarget;
use crate::scroll::{ScrollState, TickerPhase};
use crate::timer::{Scheduler, TimerId};
use crate::track::Track;

/// Start offsets above this are wrapped into the content width, leaving
/// room for ticks to grow the position without saturating.
const MAX_START_POSITION: u64 = u64::MAX / 2;

/// A recycle event: `item` moved from the front to the back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap {
    pub item: ItemId,
    /// Outer width subtracted from the position.
    pub width: u64,
    /// Position after the decrement.
    pub position: u64,
}

/// Owned state of one scrolling track.
#[derive(Debug, Clone)]
pub struct Ticker {
    index: usize,
    track: Track,
    state: ScrollState,
    phase: TickerPhase,
    timer: Option<TimerId>,
    interval: Duration,
    step: u64,
    start_offset: u64,
}

impl Ticker {
    /// Wrap `track` as lane `index`. The ticker stays stopped until
    /// [`Ticker::start`].
    pub fn new(index: usize, track: Track, config: &TickerConfig) -> Self {
        Self {
            index,
            track,
            state: ScrollState::default(),
            phase: TickerPhase::Stopped,
            timer: None,
            interval: config.tick_interval(),
            step: config.step,
            start_offset: config.start_offset(index),
        }
    }

    /// Build the track from `items` and wrap it.
    pub fn create(
        index: usize,
        items: impl IntoIterator<Item = Item>,
        config: &TickerConfig,
    ) -> Result<Self> {
        let track = Track::create(items, config.viewport_width)?;
        Ok(Self::new(index, track, config))
    }

    /// Override the start offset derived from the lane index.
    #[must_use]
    pub fn with_start_offset(mut self, offset: u64) -> Self {
        self.start_offset = offset;
        self
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn track(&self) -> &Track {
        &self.track
    }

    pub const fn state(&self) -> &ScrollState {
        &self.state
    }

    pub const fn phase(&self) -> TickerPhase {
        self.phase
    }

    /// Handle of the registered timer, if any.
    pub const fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Scroll to the start offset and register the repeating timer.
    ///
    /// Starting a running or paused ticker changes nothing. A torn-down
    /// ticker cannot be started again.
    pub fn start<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> Result<ScrollState> {
        match self.phase {
            TickerPhase::Stopped => {
                self.state = ScrollState::at(self.initial_position());
                self.state.running = true;
                self.timer = Some(scheduler.set_interval(self.interval));
                self.phase = TickerPhase::Running;
                tracing::debug!(
                    track = self.index,
                    position = self.state.position,
                    interval_ms = self.interval.as_millis() as u64,
                    "ticker.start"
                );
                Ok(self.state)
            }
            TickerPhase::Running | TickerPhase::Paused => Ok(self.state),
            TickerPhase::TornDown => Err(TickerError::TornDown { index: self.index }),
        }
    }

    fn initial_position(&self) -> u64 {
        if self.start_offset <= MAX_START_POSITION {
            return self.start_offset;
        }
        match self.track.content_width() {
            0 => 0,
            width => self.start_offset % width,
        }
    }

    /// Advance by one step and evaluate the swap condition.
    ///
    /// Does nothing unless the ticker is running.
    pub fn tick(&mut self) -> Option<Swap> {
        if !self.phase.is_running() {
            return None;
        }
        self.state.position = self.state.position.saturating_add(self.step);
        self.state.stats.ticks += 1;
        tracing::trace!(track = self.index, position = self.state.position, "ticker.tick");
        self.swap_if_due()
    }

    /// Deliver a timer firing. Returns `true` if a tick ran.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.timer != Some(id) || !self.phase.is_running() {
            tracing::trace!(track = self.index, timer = %id, "ticker.stale_fire");
            return false;
        }
        self.tick();
        true
    }

    fn swap_if_due(&mut self) -> Option<Swap> {
        let threshold = match self.state.next_swap_threshold {
            Some(threshold) => threshold,
            None => {
                let width = self.track.front()?.outer_width();
                self.state.next_swap_threshold = Some(width);
                self.state.stats.measurements += 1;
                width
            }
        };
        if self.state.position < threshold {
            return None;
        }

        let moved = self.track.recycle_front()?;
        let swap = Swap {
            item: moved.id(),
            width: moved.outer_width(),
            position: self.state.position.saturating_sub(moved.outer_width()),
        };
        self.state.position = swap.position;
        self.state.next_swap_threshold = None;
        self.state.stats.swaps += 1;
        tracing::debug!(
            track = self.index,
            item = %swap.item,
            width = swap.width,
            position = swap.position,
            "ticker.swap"
        );
        Some(swap)
    }

    /// Clear the timer and freeze the position. Idempotent.
    pub fn pause<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> ScrollState {
        if self.phase.is_running() {
            if let Some(id) = self.timer.take() {
                scheduler.clear_interval(id);
            }
            self.phase = TickerPhase::Paused;
            self.state.running = false;
            tracing::debug!(track = self.index, position = self.state.position, "ticker.pause");
        }
        self.state
    }

    /// Register a fresh timer and continue from the frozen position.
    /// Idempotent; only a paused ticker resumes.
    pub fn resume<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> ScrollState {
        if self.phase == TickerPhase::Paused {
            self.timer = Some(scheduler.set_interval(self.interval));
            self.phase = TickerPhase::Running;
            self.state.running = true;
            tracing::debug!(track = self.index, position = self.state.position, "ticker.resume");
        }
        self.state
    }

    /// Clear the timer and enter the terminal phase.
    pub fn stop<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.phase.is_terminal() {
            return;
        }
        if let Some(id) = self.timer.take() {
            scheduler.clear_interval(id);
        }
        self.phase = TickerPhase::TornDown;
        self.state.running = false;
        tracing::debug!(track = self.index, "ticker.stop");
    }

    /// Resolve the item under viewport column `x`.
    pub fn hit_test(&self, x: u32) -> Option<ClickTarget> {
        let (item, offset) = self.track.item_at(self.state.position, x)?;
        Some(ClickTarget {
            lane: self.index,
            item: item.id(),
            url: item.url().map(str::to_owned),
            on_link: item.link_at(offset).is_some(),
        })
    }
}
