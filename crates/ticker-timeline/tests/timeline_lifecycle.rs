//! Timeline widget lifecycle against a JSON fixture and a virtual clock.

use std::time::Duration;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use ticker_core::{ClickOutcome, DeterministicScheduler, ItemId, PointerEvent, TickerPhase};
use ticker_timeline::{
    JsonFileSource, Post, StaticSource, TimelineConfig, TimelineState, TimelineWidget,
    partition_lanes,
};

const FIXTURE: &str = r#"[
    {"id": 1, "text": "first https://example.com/one", "url": "https://twitter.com/a/status/1",
     "created_at": "Mon Mar 02 10:00:00 +0000 2015", "user": {"name": "A", "screen_name": "a"}},
    {"id": 2, "text": "second", "url": "https://twitter.com/a/status/2"},
    {"id": 3, "text": "third #tag", "url": "https://twitter.com/a/status/3"},
    {"id": 4, "text": "fourth"},
    {"id": 5, "text": "fifth", "url": "https://twitter.com/a/status/5"},
    {"id": 6, "text": "sixth", "url": "https://twitter.com/a/status/6"},
    {"id": 7, "text": "seventh", "url": "https://twitter.com/a/status/7"}
]"#;

fn config() -> TimelineConfig {
    let mut config = TimelineConfig {
        item_width: Some(40),
        item_margin: 0,
        ..TimelineConfig::default()
    };
    config.ticker.viewport_width = 60;
    config
}

fn running_widget() -> TimelineWidget {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.json");
    std::fs::write(&path, FIXTURE).unwrap();
    let config = config();
    let mut renderer = config.text_renderer();
    let mut widget = TimelineWidget::new(DeterministicScheduler::new(), config);
    let state = widget
        .start(&mut JsonFileSource::new(&path), &mut renderer)
        .unwrap();
    assert_eq!(state, &TimelineState::Running { lanes: 3 });
    widget
}

#[test]
fn fixture_posts_split_two_two_three() {
    let widget = running_widget();
    let orders: Vec<_> = widget
        .strip()
        .tickers()
        .iter()
        .map(|t| t.track().order())
        .collect();
    assert_eq!(
        orders,
        vec![
            vec![ItemId(0), ItemId(1)],
            vec![ItemId(2), ItemId(3)],
            vec![ItemId(4), ItemId(5), ItemId(6)],
        ]
    );
}

#[test]
fn lanes_scroll_and_recycle_independently() {
    let mut widget = running_widget();
    // 40 ticks: lane 0 recycles its first item exactly once.
    widget.advance(Duration::from_millis(20 * 40));
    let lane0 = &widget.strip().tickers()[0];
    assert_eq!(lane0.state().position, 0);
    assert_eq!(lane0.track().order(), vec![ItemId(1), ItemId(0)]);
    for ticker in widget.strip().tickers() {
        assert_eq!(ticker.state().stats.ticks, 40);
    }
}

#[test]
fn hover_pauses_every_lane_and_click_opens_permalink() {
    let mut widget = running_widget();
    let mut opened = Vec::new();
    widget.advance(Duration::from_millis(200));

    widget.handle_pointer(PointerEvent::Enter, &mut opened);
    assert!(
        widget
            .strip()
            .tickers()
            .iter()
            .all(|t| t.phase() == TickerPhase::Paused)
    );
    assert_eq!(widget.advance(Duration::from_secs(1)), 0);

    // Lane 0 sits at position 10; column 35 is content 45, the second post.
    assert_eq!(
        widget.handle_pointer(PointerEvent::Click { lane: 0, x: 35 }, &mut opened),
        Some(ClickOutcome::Opened("https://twitter.com/a/status/2".into()))
    );

    widget.handle_pointer(PointerEvent::Leave, &mut opened);
    widget.advance(Duration::from_millis(20));
    assert_eq!(widget.strip().tickers()[0].state().position, 11);
    assert_eq!(opened, vec!["https://twitter.com/a/status/2".to_string()]);
}

#[test]
fn click_on_inline_link_does_not_open_the_post() {
    let mut widget = running_widget();
    let mut opened = Vec::new();
    // Lane 0 reads "@a: first https://example.com/one"; the URL starts at
    // column 10.
    assert_eq!(
        widget.handle_pointer(PointerEvent::Click { lane: 0, x: 12 }, &mut opened),
        Some(ClickOutcome::OnLink)
    );
    // Lane 1 starts 180 columns in, which wraps to offset 20 of the third post.
    assert_eq!(
        widget.handle_pointer(PointerEvent::Click { lane: 1, x: 0 }, &mut opened),
        Some(ClickOutcome::Opened("https://twitter.com/a/status/3".into()))
    );
    assert_eq!(opened.len(), 1);
}

#[test]
fn two_posts_leave_leading_lanes_empty() {
    let config = config();
    let mut renderer = config.text_renderer();
    let mut widget = TimelineWidget::new(DeterministicScheduler::new(), config);
    let mut source = StaticSource::posts(vec![Post::new("a"), Post::new("b")]);
    let state = widget.start(&mut source, &mut renderer).unwrap();
    assert_eq!(state, &TimelineState::Running { lanes: 1 });
    let ticker = &widget.strip().tickers()[0];
    assert_eq!(ticker.index(), 2);
    assert_eq!(ticker.state().position, 360);
}

#[test]
fn stop_clears_every_timer() {
    let mut widget = running_widget();
    widget.stop();
    assert_eq!(widget.strip().scheduler().active_count(), 0);
    let mut opened = Vec::new();
    assert_eq!(
        widget.handle_pointer(PointerEvent::Leave, &mut opened),
        None
    );
    assert_eq!(widget.advance(Duration::from_secs(1)), 0);
}

proptest! {
    #[test]
    fn partition_preserves_every_item_in_order(n in 0usize..200, lanes in 1usize..8) {
        let items: Vec<usize> = (0..n).collect();
        let split = partition_lanes(items.clone(), lanes);
        prop_assert_eq!(split.len(), lanes);
        let flat: Vec<usize> = split.iter().flatten().copied().collect();
        prop_assert_eq!(flat, items);
        let per_lane = n / lanes;
        for lane in &split[..lanes - 1] {
            prop_assert_eq!(lane.len(), per_lane);
        }
        if n > 0 {
            prop_assert!(!split[lanes - 1].is_empty());
        }
    }
}
