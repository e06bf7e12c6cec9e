#![forbid(unsafe_code)]

//! The timeline widget: fetch, render, split into lanes, scroll.
//!
//! # Lifecycle
//!
//! `Idle -> Loading -> Running | Failed`, and any state `-> Stopped`.
//!
//! [`TimelineWidget::start`] runs the whole sequence synchronously. Hosts
//! whose transport is asynchronous call [`TimelineWidget::begin`] when the
//! request goes out and [`TimelineWidget::complete`] when it resolves; a
//! response that arrives after [`TimelineWidget::stop`] is dropped.

use std::time::Duration;

use ticker_core::{
    ClickOutcome, DeterministicScheduler, ItemId, LinkOpener, PointerEvent, Scheduler,
    TickerStrip,
};

use crate::config::TimelineConfig;
use crate::error::{Result, TimelineError};
use crate::partition::partition_lanes;
use crate::post::{ErrorPayload, Post};
use crate::render::RenderItem;
use crate::source::FetchItems;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineState {
    /// Constructed, nothing requested yet.
    Idle,
    /// Waiting for the posts; hosts show a loading indicator.
    Loading,
    /// The fetch failed; hosts show the message instead of the lanes.
    Failed(String),
    /// Lanes are scrolling. `lanes` counts the non-empty ones.
    Running { lanes: usize },
    /// Torn down. Terminal.
    Stopped,
}

#[derive(Debug)]
pub struct TimelineWidget<S = DeterministicScheduler> {
    config: TimelineConfig,
    state: TimelineState,
    strip: TickerStrip<S>,
}

impl<S: Scheduler> TimelineWidget<S> {
    pub fn new(scheduler: S, config: TimelineConfig) -> Self {
        let strip = TickerStrip::new(scheduler, config.ticker.clone());
        Self {
            config,
            state: TimelineState::Idle,
            strip,
        }
    }

    pub const fn state(&self) -> &TimelineState {
        &self.state
    }

    pub const fn strip(&self) -> &TickerStrip<S> {
        &self.strip
    }

    /// Message to display in place of the lanes, if the fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            TimelineState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Fetch, render and start scrolling.
    pub fn start<F, R>(&mut self, source: &mut F, renderer: &mut R) -> Result<&TimelineState>
    where
        F: FetchItems + ?Sized,
        R: RenderItem + ?Sized,
    {
        self.begin()?;
        if self.state != TimelineState::Loading {
            return Ok(&self.state);
        }
        let response = source.fetch();
        self.complete(response, renderer)
    }

    /// Enter `Loading`. Only an idle widget moves; a stopped one is an error.
    pub fn begin(&mut self) -> Result<()> {
        match self.state {
            TimelineState::Stopped => Err(TimelineError::Stopped),
            TimelineState::Idle => {
                self.state = TimelineState::Loading;
                tracing::info!("timeline.loading");
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Apply the fetch result. Ignored unless the widget is idle or loading;
    /// dropped with a debug trace once stopped.
    pub fn complete<R>(
        &mut self,
        response: std::result::Result<Vec<Post>, ErrorPayload>,
        renderer: &mut R,
    ) -> Result<&TimelineState>
    where
        R: RenderItem + ?Sized,
    {
        match self.state {
            TimelineState::Idle | TimelineState::Loading => {}
            TimelineState::Stopped => {
                tracing::debug!("timeline.late_response");
                return Err(TimelineError::Stopped);
            }
            TimelineState::Failed(_) | TimelineState::Running { .. } => return Ok(&self.state),
        }

        match response {
            Err(payload) => {
                tracing::warn!(error = %payload, "timeline.fetch_failed");
                self.state = TimelineState::Failed(payload.to_string());
            }
            Ok(posts) => {
                let items: Vec<_> = posts
                    .iter()
                    .enumerate()
                    .map(|(i, post)| renderer.render(ItemId(i as u64), post))
                    .collect();
                for (lane, items) in partition_lanes(items, self.config.lanes)
                    .into_iter()
                    .enumerate()
                {
                    self.strip.push_lane_at(lane, items);
                }
                self.strip.start();
                let lanes = self.strip.tickers().len();
                if lanes == 0 {
                    tracing::warn!(posts = posts.len(), "timeline.no_lanes");
                }
                tracing::info!(posts = posts.len(), lanes, "timeline.running");
                self.state = TimelineState::Running { lanes };
            }
        }
        Ok(&self.state)
    }

    /// Route a pointer event to the lanes while running.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        opener: &mut dyn LinkOpener,
    ) -> Option<ClickOutcome> {
        match self.state {
            TimelineState::Running { .. } => self.strip.handle_pointer(event, opener),
            _ => None,
        }
    }

    /// Clear every timer and detach every listener of this widget's lanes.
    pub fn stop(&mut self) {
        if self.state == TimelineState::Stopped {
            return;
        }
        self.strip.stop();
        self.state = TimelineState::Stopped;
        tracing::info!("timeline.stopped");
    }
}

impl TimelineWidget<DeterministicScheduler> {
    /// Advance the virtual clock and tick every lane that fell due.
    pub fn advance(&mut self, dt: Duration) -> usize {
        self.strip.advance(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextRenderer;
    use crate::source::StaticSource;
    use ticker_core::TickerPhase;

    fn posts(n: usize) -> Vec<Post> {
        (0..n).map(|i| Post::new(format!("post {i}"))).collect()
    }

    fn widget() -> TimelineWidget {
        TimelineWidget::new(DeterministicScheduler::new(), TimelineConfig::default())
    }

    #[test]
    fn starts_idle() {
        let w = widget();
        assert_eq!(w.state(), &TimelineState::Idle);
        assert!(w.error_message().is_none());
    }

    #[test]
    fn begin_then_complete() {
        let mut w = widget();
        w.begin().unwrap();
        assert_eq!(w.state(), &TimelineState::Loading);
        let state = w.complete(Ok(posts(6)), &mut TextRenderer::new()).unwrap();
        assert_eq!(state, &TimelineState::Running { lanes: 3 });
    }

    #[test]
    fn lanes_are_staggered_by_index() {
        let mut w = widget();
        w.start(&mut StaticSource::posts(posts(9)), &mut TextRenderer::new())
            .unwrap();
        let offsets: Vec<_> = w
            .strip()
            .tickers()
            .iter()
            .map(|t| t.state().position)
            .collect();
        assert_eq!(offsets, vec![0, 180, 360]);
    }

    #[test]
    fn failure_shows_message() {
        let mut w = widget();
        let mut source = StaticSource::failure(ErrorPayload::new("no_account").with_message("x"));
        let state = w.start(&mut source, &mut TextRenderer::new()).unwrap();
        assert_eq!(state, &TimelineState::Failed("no_account: x".into()));
        assert_eq!(w.error_message(), Some("no_account: x"));
        assert!(w.strip().tickers().is_empty());
    }

    #[test]
    fn second_start_does_not_refetch() {
        let mut w = widget();
        let mut calls = 0;
        let mut source = || -> std::result::Result<Vec<Post>, ErrorPayload> {
            calls += 1;
            Ok(posts(3))
        };
        let mut renderer = TextRenderer::new();
        w.start(&mut source, &mut renderer).unwrap();
        w.start(&mut source, &mut renderer).unwrap();
        drop(source);
        assert_eq!(calls, 1);
        assert_eq!(w.strip().tickers().len(), 3);
    }

    #[test]
    fn response_after_stop_is_dropped() {
        let mut w = widget();
        w.begin().unwrap();
        w.stop();
        let err = w.complete(Ok(posts(3)), &mut TextRenderer::new()).unwrap_err();
        assert!(matches!(err, TimelineError::Stopped));
        assert!(w.strip().tickers().is_empty());
        assert!(matches!(w.begin(), Err(TimelineError::Stopped)));
    }

    #[test]
    fn stop_tears_down_lanes() {
        let mut w = widget();
        w.start(&mut StaticSource::posts(posts(3)), &mut TextRenderer::new())
            .unwrap();
        w.advance(Duration::from_millis(100));
        w.stop();
        assert_eq!(w.state(), &TimelineState::Stopped);
        assert!(
            w.strip()
                .tickers()
                .iter()
                .all(|t| t.phase() == TickerPhase::TornDown)
        );
        assert_eq!(w.strip().scheduler().active_count(), 0);
        assert_eq!(w.advance(Duration::from_millis(100)), 0);
    }

    #[test]
    fn pointer_ignored_unless_running() {
        let mut w = widget();
        let mut opened = Vec::new();
        assert_eq!(
            w.handle_pointer(PointerEvent::Click { lane: 0, x: 0 }, &mut opened),
            None
        );
    }
}
