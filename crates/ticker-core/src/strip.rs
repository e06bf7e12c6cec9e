#![forbid(unsafe_code)]

//! A container of tickers sharing one scheduler and one pointer surface.
//!
//! The strip is the only owner of its tickers and their timers. Hover is a
//! pure delegation: entering pauses every ticker, leaving resumes every
//! ticker. Clicks are resolved against the clicked lane and forwarded to a
//! [`LinkOpener`].

use std::time::Duration;

use crate::config::TickerConfig;
use crate::item::Item;
use crate::pointer::{ClickOutcome, PointerEvent};
use crate::ticker::Ticker;
use crate::timer::{DeterministicScheduler, Scheduler, TimerId};

/// Opens an external link in a new browsing context.
pub trait LinkOpener {
    fn open_in_new_context(&mut self, url: &str);
}

/// Records opened links, in order.
impl LinkOpener for Vec<String> {
    fn open_in_new_context(&mut self, url: &str) {
        self.push(url.to_owned());
    }
}

#[derive(Debug)]
pub struct TickerStrip<S = DeterministicScheduler> {
    scheduler: S,
    config: TickerConfig,
    tickers: Vec<Ticker>,
    /// Lanes rejected by `push_lane`; they still consume a lane index.
    skipped: usize,
    listening: bool,
    torn_down: bool,
}

impl<S: Scheduler> TickerStrip<S> {
    pub fn new(scheduler: S, config: TickerConfig) -> Self {
        Self {
            scheduler,
            config,
            tickers: Vec::new(),
            skipped: 0,
            listening: false,
            torn_down: false,
        }
    }

    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    pub fn ticker(&self, lane: usize) -> Option<&Ticker> {
        self.tickers.iter().find(|t| t.index() == lane)
    }

    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Whether pointer events are currently routed to the tickers.
    pub const fn is_listening(&self) -> bool {
        self.listening
    }

    /// Add a lane built from `items`. The lane index is its position among
    /// pushed lanes, including rejected ones, so staggering follows the
    /// caller's layout.
    ///
    /// An empty lane cannot loop and is skipped with a warning; the other
    /// lanes are unaffected. Lanes pushed after [`TickerStrip::start`] start
    /// immediately.
    pub fn push_lane(&mut self, items: impl IntoIterator<Item = Item>) -> Option<usize> {
        self.push_lane_at(self.next_lane_index(), items)
    }

    /// Add a lane at an explicit lane index (controls the stagger).
    pub fn push_lane_at(
        &mut self,
        lane: usize,
        items: impl IntoIterator<Item = Item>,
    ) -> Option<usize> {
        if self.torn_down {
            return None;
        }
        let mut ticker = match Ticker::create(lane, items, &self.config) {
            Ok(ticker) => ticker,
            Err(err) => {
                tracing::warn!(lane, error = %err, "strip.lane_skipped");
                self.skipped += 1;
                return None;
            }
        };
        if self.listening {
            if let Err(err) = ticker.start(&mut self.scheduler) {
                tracing::warn!(lane, error = %err, "strip.start_failed");
            }
        }
        self.tickers.push(ticker);
        Some(lane)
    }

    fn next_lane_index(&self) -> usize {
        self.tickers.len() + self.skipped
    }

    /// Start every ticker and attach the pointer listeners.
    pub fn start(&mut self) {
        if self.torn_down || self.listening {
            return;
        }
        for ticker in &mut self.tickers {
            if let Err(err) = ticker.start(&mut self.scheduler) {
                tracing::warn!(lane = ticker.index(), error = %err, "strip.start_failed");
            }
        }
        self.listening = true;
        tracing::info!(lanes = self.tickers.len(), "strip.start");
    }

    /// Deliver timer firings, in order, to their owning tickers. Returns the
    /// number of ticks that ran.
    pub fn dispatch(&mut self, fired: &[TimerId]) -> usize {
        let mut ran = 0;
        for &id in fired {
            if let Some(ticker) = self.tickers.iter_mut().find(|t| t.timer() == Some(id)) {
                if ticker.on_timer(id) {
                    ran += 1;
                }
            }
        }
        ran
    }

    pub fn pause_all(&mut self) {
        for ticker in &mut self.tickers {
            ticker.pause(&mut self.scheduler);
        }
    }

    pub fn resume_all(&mut self) {
        for ticker in &mut self.tickers {
            ticker.resume(&mut self.scheduler);
        }
    }

    /// Pointer entered the strip: pause every ticker.
    pub fn pointer_enter(&mut self) {
        if self.listening {
            self.pause_all();
        }
    }

    /// Pointer left the strip: resume every ticker.
    pub fn pointer_leave(&mut self) {
        if self.listening {
            self.resume_all();
        }
    }

    /// Route a click at column `x` of `lane`.
    pub fn click(&mut self, lane: usize, x: u32, opener: &mut dyn LinkOpener) -> ClickOutcome {
        if !self.listening {
            return ClickOutcome::Missed;
        }
        let Some(target) = self.ticker(lane).and_then(|t| t.hit_test(x)) else {
            return ClickOutcome::Missed;
        };
        let outcome = target.outcome();
        match &outcome {
            ClickOutcome::Opened(url) => {
                tracing::info!(lane, item = %target.item, url = %url, "strip.open_link");
                opener.open_in_new_context(url);
            }
            ClickOutcome::NoUrl => {
                tracing::debug!(lane, item = %target.item, "strip.click_without_url");
            }
            ClickOutcome::OnLink | ClickOutcome::Missed => {}
        }
        outcome
    }

    /// Route any pointer event. Returns the click outcome for clicks.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        opener: &mut dyn LinkOpener,
    ) -> Option<ClickOutcome> {
        match event {
            PointerEvent::Enter => {
                self.pointer_enter();
                None
            }
            PointerEvent::Leave => {
                self.pointer_leave();
                None
            }
            PointerEvent::Click { lane, x } => Some(self.click(lane, x, opener)),
        }
    }

    /// Clear every timer and detach the pointer listeners. Terminal.
    pub fn stop(&mut self) {
        if self.torn_down {
            return;
        }
        for ticker in &mut self.tickers {
            ticker.stop(&mut self.scheduler);
        }
        self.listening = false;
        self.torn_down = true;
        tracing::info!(lanes = self.tickers.len(), "strip.stop");
    }

    pub const fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl TickerStrip<DeterministicScheduler> {
    /// Advance the virtual clock and dispatch everything that fell due.
    pub fn advance(&mut self, dt: Duration) -> usize {
        let fired = self.scheduler.advance(dt);
        self.dispatch(&fired)
    }
}
