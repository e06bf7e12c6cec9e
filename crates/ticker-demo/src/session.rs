#![forbid(unsafe_code)]

//! The demo session: a timeline widget fed by wall-clock deltas.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use ticker_core::{DeterministicScheduler, PointerEvent};
use ticker_timeline::{JsonFileSource, TimelineConfig, TimelineWidget};
use web_time::Instant;

use crate::error::{DemoError, Result};
use crate::frame::render_widget;

const CLEAR: &str = "\x1b[H\x1b[2J";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Hover is toggled every `hover_every`; `None` never hovers.
    pub hover_every: Option<Duration>,
    /// Frames are separated by a blank line instead of a screen clear.
    pub plain: bool,
}

#[derive(Debug)]
pub struct Session {
    widget: TimelineWidget<DeterministicScheduler>,
    options: SessionOptions,
    elapsed: Duration,
    hovering: bool,
    frames: u64,
    opened: Vec<String>,
}

impl Session {
    /// Load posts from `posts` and start scrolling.
    pub fn start(config: TimelineConfig, posts: &Path, options: SessionOptions) -> Result<Self> {
        let mut renderer = config.text_renderer();
        let mut widget = TimelineWidget::new(DeterministicScheduler::new(), config);
        widget.start(&mut JsonFileSource::new(posts), &mut renderer)?;
        if let Some(message) = widget.error_message() {
            return Err(DemoError::Fetch {
                message: message.to_owned(),
            });
        }
        Ok(Self {
            widget,
            options,
            elapsed: Duration::ZERO,
            hovering: false,
            frames: 0,
            opened: Vec::new(),
        })
    }

    pub const fn widget(&self) -> &TimelineWidget<DeterministicScheduler> {
        &self.widget
    }

    pub const fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance by `dt`, apply the hover schedule and write one frame.
    pub fn step(&mut self, dt: Duration, out: &mut impl Write) -> Result<()> {
        self.widget.advance(dt);
        self.elapsed += dt;
        self.apply_hover();
        self.write_frame(out)
    }

    fn apply_hover(&mut self) {
        let Some(period) = self.options.hover_every.filter(|p| !p.is_zero()) else {
            return;
        };
        let wanted = (self.elapsed.as_millis() / period.as_millis()) % 2 == 1;
        if wanted == self.hovering {
            return;
        }
        let event = if wanted {
            PointerEvent::Enter
        } else {
            PointerEvent::Leave
        };
        self.widget.handle_pointer(event, &mut self.opened);
        self.hovering = wanted;
        tracing::info!(hovering = wanted, elapsed_ms = self.elapsed.as_millis() as u64, "demo.hover");
    }

    pub fn write_frame(&mut self, out: &mut impl Write) -> Result<()> {
        if self.options.plain {
            if self.frames > 0 {
                writeln!(out)?;
            }
        } else {
            write!(out, "{CLEAR}")?;
        }
        writeln!(out, "{}", render_widget(&self.widget))?;
        out.flush()?;
        self.frames += 1;
        Ok(())
    }

    pub fn stop(&mut self) {
        self.widget.stop();
    }
}

/// Drive `session` from the wall clock for `total`, one frame per `frame`.
pub fn run_for(
    session: &mut Session,
    total: Duration,
    frame: Duration,
    out: &mut impl Write,
) -> Result<()> {
    session.write_frame(out)?;
    let started = Instant::now();
    let mut last = started;
    while started.elapsed() < total {
        std::thread::sleep(frame);
        let now = Instant::now();
        session.step(now.duration_since(last), out)?;
        last = now;
    }
    session.stop();
    tracing::info!(frames = session.frames(), "demo.done");
    Ok(())
}
