// Host-side tests for declarative scroll bindings.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod tween {
        include!("../src/core/tween.rs");
    }
    pub mod style {
        include!("../src/core/style.rs");
    }
    pub mod counter {
        include!("../src/core/counter.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use crate::constants::*;
use crate::core::scroll::*;
use crate::core::style::Props;
use crate::core::tween::{Ease, Timeline};

const VIEWPORT_H: f32 = 800.0;

fn layout(top: f32, height: f32) -> TriggerLayout {
    TriggerLayout { top, height }
}

fn entrance(selector: &str) -> Entrance {
    ENTRANCES
        .iter()
        .find(|e| e.selector == selector)
        .copied()
        .expect("entrance registered")
}

fn scrub_fade() -> BindingSpec {
    BindingSpec {
        start: TriggerPoint::parse("top top").expect("valid"),
        end: TriggerPoint::parse("bottom top"),
        mode: TriggerMode::Scrub,
        effect: Effect::Props {
            from: Props {
                opacity: 0.0,
                ..Props::NATURAL
            },
            to: Props::NATURAL,
        },
        duration: 0.0,
        delay: 0.0,
        ease: Ease::Linear,
    }
}

fn props_of(updates: &[StyleUpdate<usize>], key: usize) -> Option<Props> {
    updates.iter().rev().find_map(|u| match u {
        StyleUpdate::Props(k, p) if *k == key => Some(*p),
        _ => None,
    })
}

#[test]
fn trigger_points_parse_edges_and_percentages() {
    let p = TriggerPoint::parse("top 80%").expect("valid");
    assert_eq!(p.element_fraction, 0.0);
    assert!((p.viewport_fraction - 0.8).abs() < 1e-6);

    let p = TriggerPoint::parse("bottom top").expect("valid");
    assert_eq!((p.element_fraction, p.viewport_fraction), (1.0, 0.0));

    let p = TriggerPoint::parse("center center").expect("valid");
    assert_eq!((p.element_fraction, p.viewport_fraction), (0.5, 0.5));

    assert!(TriggerPoint::parse("top").is_none());
    assert!(TriggerPoint::parse("middle 10%").is_none());
    assert!(TriggerPoint::parse("top 80").is_none());
    assert!(TriggerPoint::parse("top 80% extra").is_none());
}

#[test]
fn trigger_scroll_position_matches_edge_meeting_viewport_line() {
    let p = TriggerPoint::parse("top 80%").expect("valid");
    // Element top at 1000px meets the line 640px down the viewport.
    assert!((p.scroll_position(layout(1000.0, 400.0), VIEWPORT_H) - 360.0).abs() < 1e-3);
}

#[test]
fn every_entrance_builds_a_binding() {
    assert_eq!(ENTRANCES.len(), 8);
    for e in ENTRANCES.iter() {
        let spec = e.binding(3).expect("valid trigger strings");
        assert!((spec.delay - e.stagger * 3.0).abs() < 1e-6);
        assert!(spec.duration > 0.0);
        match spec.effect {
            Effect::Props { from, to } => {
                assert_eq!(from.opacity, 0.0, "{} starts hidden", e.selector);
                assert_eq!(to, Props::NATURAL);
            }
            _ => panic!("{} should tween props", e.selector),
        }
    }
}

#[test]
fn play_binding_renders_start_state_then_plays_on_crossing() {
    let mut sched = ScrollScheduler::new();
    let spec = entrance(".stat-card").binding(0).expect("valid");
    let initial = sched.register(0usize, 0usize, spec, layout(1000.0, 200.0));
    match initial {
        Some(StyleUpdate::Props(0, p)) => {
            assert_eq!(p.opacity, 0.0);
            assert_eq!(p.y, 30.0);
        }
        other => panic!("unexpected initial update {other:?}"),
    }

    // Start is 1000 - 0.85 * 800 = 320.
    let mut out = Vec::new();
    sched.update(300.0, VIEWPORT_H, 0.1, &mut out);
    assert!(out.is_empty());
    assert_eq!(sched.progress_of(0), vec![0.0]);

    sched.update(330.0, VIEWPORT_H, 0.4, &mut out);
    assert!((sched.progress_of(0)[0] - 0.5).abs() < 1e-5);
    let mid = props_of(&out, 0).expect("update emitted");
    assert!(mid.opacity > 0.0 && mid.opacity < 1.0);

    out.clear();
    sched.update(330.0, VIEWPORT_H, 1.0, &mut out);
    assert_eq!(props_of(&out, 0), Some(Props::NATURAL));

    // Play-once bindings stay put when scrolling back up.
    out.clear();
    sched.update(0.0, VIEWPORT_H, 1.0, &mut out);
    assert!(out.is_empty());
    assert_eq!(sched.progress_of(0), vec![1.0]);
}

#[test]
fn section_reverses_when_scrolling_back_above_start() {
    let mut sched = ScrollScheduler::new();
    let spec = entrance(".section").binding(0).expect("valid");
    sched.register(7usize, 7usize, spec, layout(1000.0, 600.0));
    let start = 1000.0 - 0.8 * VIEWPORT_H;

    let mut out = Vec::new();
    sched.update(start + 1.0, VIEWPORT_H, 2.0, &mut out);
    assert_eq!(sched.progress_of(7), vec![1.0]);

    sched.update(start - 1.0, VIEWPORT_H, 0.25, &mut out);
    assert!((sched.progress_of(7)[0] - 0.75).abs() < 1e-5);
    sched.update(start - 1.0, VIEWPORT_H, 2.0, &mut out);
    assert_eq!(sched.progress_of(7), vec![0.0]);
    let hidden = props_of(&out, 7).expect("reverse emitted");
    assert_eq!(hidden.opacity, 0.0);

    // And plays forward again on the next crossing.
    sched.update(start + 1.0, VIEWPORT_H, 0.5, &mut out);
    assert!((sched.progress_of(7)[0] - 0.5).abs() < 1e-5);
}

#[test]
fn stagger_delays_later_elements() {
    let mut sched = ScrollScheduler::new();
    let e = entrance(".partner-logo");
    for i in 0..3usize {
        sched.register(i, i, e.binding(i).expect("valid"), layout(500.0, 100.0));
    }
    let mut out = Vec::new();
    sched.update(1000.0, VIEWPORT_H, e.stagger * 1.5, &mut out);
    let p: Vec<f32> = (0..3).map(|i| sched.progress_of(i)[0]).collect();
    assert!(p[0] > p[1]);
    assert!(p[1] > 0.0);
    assert_eq!(p[2], 0.0);
}

#[test]
fn frozen_timeline_keeps_play_bindings_at_start() {
    let timeline = Timeline::new(0.0);
    let mut sched = ScrollScheduler::new();
    sched.register(
        0usize,
        0usize,
        entrance(".section-title").binding(0).expect("valid"),
        layout(100.0, 50.0),
    );
    let mut out = Vec::new();
    for _ in 0..120 {
        sched.update(5000.0, VIEWPORT_H, timeline.scale(1.0 / 60.0), &mut out);
    }
    assert!(out.is_empty());
    assert_eq!(sched.progress_of(0), vec![0.0]);
}

#[test]
fn scrub_progress_is_monotonic_and_reversible() {
    let mut sched = ScrollScheduler::new();
    let initial = sched.register(1usize, 0usize, scrub_fade(), layout(0.0, 600.0));
    assert!(initial.is_none());

    let mut out = Vec::new();
    let mut forward = Vec::new();
    let mut last = -1.0;
    for s in (0..81).map(|i| i as f32 * 10.0) {
        sched.update(s, VIEWPORT_H, 0.0, &mut out);
        let p = sched.progress_of(1)[0];
        assert!(p >= last, "scrub went backwards at {s}");
        last = p;
        forward.push(p);
    }
    assert_eq!(last, 1.0);

    for (i, s) in (0..81).map(|i| i as f32 * 10.0).enumerate().rev() {
        sched.update(s, VIEWPORT_H, 0.0, &mut out);
        assert_eq!(sched.progress_of(1)[0], forward[i]);
    }
    assert_eq!(sched.progress_of(1), vec![0.0]);
}

#[test]
fn parallax_drifts_by_factor_of_scrolled_distance() {
    let mut sched = ScrollScheduler::new();
    let initial = sched.register(1usize, 0usize, parallax_binding(PARALLAX_FACTOR), layout(0.0, 600.0));
    assert!(initial.is_none());
    let mut out = Vec::new();
    sched.update(300.0, VIEWPORT_H, 0.0, &mut out);
    let p = props_of(&out, 1).expect("parallax emitted");
    assert!((p.y - 300.0 * PARALLAX_FACTOR).abs() < 1e-3);
    assert_eq!(p.opacity, 1.0);

    // Unchanged scroll emits nothing.
    out.clear();
    sched.update(300.0, VIEWPORT_H, 0.5, &mut out);
    assert!(out.is_empty());
}

#[test]
fn scrub_window_edges() {
    assert_eq!(scrub_progress(-10.0, 0.0, 100.0), 0.0);
    assert_eq!(scrub_progress(50.0, 0.0, 100.0), 0.5);
    assert_eq!(scrub_progress(1e6, 0.0, 100.0), 1.0);
    assert_eq!(scrub_progress(5.0, 10.0, 10.0), 0.0);
    assert_eq!(scrub_progress(10.0, 10.0, 10.0), 1.0);
}

#[test]
fn counter_counts_up_and_ends_on_original_label() {
    let spec = counter_binding("200+ Races", COUNTER_START, COUNTER_DURATION_SEC).expect("digits");
    assert_eq!(spec.ease, Ease::Power1Out);
    let mut sched = ScrollScheduler::new();
    let initial = sched.register(4usize, 4usize, spec, layout(900.0, 40.0));
    assert_eq!(initial, Some(StyleUpdate::Text(4, "0+ Races".to_string())));

    let mut out = Vec::new();
    let mut texts = Vec::new();
    for _ in 0..10 {
        out.clear();
        sched.update(900.0, VIEWPORT_H, 0.25, &mut out);
        if let Some(StyleUpdate::Text(_, t)) = out.last() {
            texts.push(t.clone());
        }
    }
    assert_eq!(texts.last().map(String::as_str), Some("200+ Races"));
    let values: Vec<u32> = texts
        .iter()
        .map(|t| t.trim_end_matches("+ Races").parse().expect("number"))
        .collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn counter_binding_skips_labels_without_digits() {
    assert!(counter_binding("Champion", COUNTER_START, COUNTER_DURATION_SEC).is_none());
    assert!(counter_binding("12 Wins", "halfway", COUNTER_DURATION_SEC).is_none());
}

#[test]
fn relayout_moves_trigger_window() {
    let mut sched = ScrollScheduler::new();
    sched.register(
        0usize,
        0usize,
        entrance(".result-item").binding(0).expect("valid"),
        layout(5000.0, 50.0),
    );
    let mut out = Vec::new();
    sched.update(500.0, VIEWPORT_H, 0.1, &mut out);
    assert_eq!(sched.progress_of(0), vec![0.0]);

    sched.relayout(|_| Some(layout(600.0, 50.0)));
    sched.update(500.0, VIEWPORT_H, 0.1, &mut out);
    assert!(sched.progress_of(0)[0] > 0.0);
}

#[test]
fn parallax_keeps_drifting_past_the_hero_bottom() {
    let mut sched = ScrollScheduler::new();
    sched.register(1usize, 0usize, parallax_binding(PARALLAX_FACTOR), layout(0.0, 600.0));
    let mut out = Vec::new();
    let mut last = -1.0;
    for s in (0..50).map(|i| i as f32 * 100.0) {
        out.clear();
        sched.update(s, VIEWPORT_H, 0.0, &mut out);
        let y = props_of(&out, 1).expect("parallax emitted").y;
        assert!((y - s * PARALLAX_FACTOR).abs() < 1e-2, "drift at {s}");
        assert!(y > last);
        last = y;
    }
}

#[test]
fn parallax_is_measured_from_the_top_of_the_document() {
    let mut sched = ScrollScheduler::new();
    // Hero pushed down by a fixed header.
    sched.register(1usize, 0usize, parallax_binding(PARALLAX_FACTOR), layout(120.0, 600.0));
    let mut out = Vec::new();
    sched.update(100.0, VIEWPORT_H, 0.0, &mut out);
    let y = props_of(&out, 1).expect("parallax emitted").y;
    assert!((y - 100.0 * PARALLAX_FACTOR).abs() < 1e-3);
    assert_eq!(sched.progress_of(1), vec![100.0]);
}
