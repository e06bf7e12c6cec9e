#![forbid(unsafe_code)]

//! Text frames for the terminal.
//!
//! Each lane becomes exactly `viewport_width` display columns. Wide glyphs
//! cut by either edge of the viewport, or by the right edge of their item,
//! are dropped rather than half drawn.

use ticker_core::{Scheduler, Track};
use ticker_timeline::{TimelineState, TimelineWidget};
use unicode_width::UnicodeWidthChar;

/// Render `track` scrolled to `position`.
pub fn render_track(track: &Track, position: u64) -> String {
    let width = track.viewport_width() as i64;
    // `None` marks the trailing column of a wide glyph.
    let mut cells: Vec<Option<char>> = vec![Some(' '); width as usize];
    for visible in track.visible(position) {
        let item = visible.item;
        let mut col = visible.x + i64::from(item.margin_left());
        let limit = col + i64::from(item.width());
        for ch in item.content().chars() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0) as i64;
            if w == 0 {
                continue;
            }
            if col + w > limit || col >= width {
                break;
            }
            if col >= 0 && col + w <= width {
                let at = col as usize;
                cells[at] = Some(ch);
                for cell in &mut cells[at + 1..at + w as usize] {
                    *cell = None;
                }
            }
            col += w;
        }
    }
    cells.into_iter().flatten().collect()
}

/// Render the whole widget: one line per lane, or a status line.
pub fn render_widget<S: Scheduler>(widget: &TimelineWidget<S>) -> String {
    match widget.state() {
        TimelineState::Idle => String::new(),
        TimelineState::Loading => "loading...".to_owned(),
        TimelineState::Failed(message) => format!("error: {message}"),
        TimelineState::Stopped => "stopped".to_owned(),
        TimelineState::Running { .. } => widget
            .strip()
            .tickers()
            .iter()
            .map(|ticker| render_track(ticker.track(), ticker.state().position))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
