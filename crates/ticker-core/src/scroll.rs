#![forbid(unsafe_code)]

//! Per-ticker scroll state.

/// Lifecycle of a ticker.
///
/// `Stopped -> Running <-> Paused -> TornDown`. `TornDown` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickerPhase {
    /// Built but never started.
    #[default]
    Stopped,
    /// Timer registered; ticks advance the position.
    Running,
    /// Timer cleared; position frozen.
    Paused,
    /// Timer cleared and listeners detached; no further transitions.
    TornDown,
}

impl TickerPhase {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::TornDown)
    }
}

/// Counters kept alongside the scroll state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickStats {
    pub ticks: u64,
    pub swaps: u64,
    /// Front-item width measurements taken for the swap threshold.
    pub measurements: u64,
}

/// Scroll position and swap cache of one ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    /// Current scroll offset of the viewport.
    pub position: u64,
    pub running: bool,
    /// Outer width of the current front item, measured lazily once per
    /// recycle cycle. `None` until the next tick measures it.
    pub next_swap_threshold: Option<u64>,
    pub stats: TickStats,
}

impl ScrollState {
    pub const fn at(position: u64) -> Self {
        Self {
            position,
            running: false,
            next_swap_threshold: None,
            stats: TickStats {
                ticks: 0,
                swaps: 0,
                measurements: 0,
            },
        }
    }
}
