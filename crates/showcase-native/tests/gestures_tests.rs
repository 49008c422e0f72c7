// Host-side tests for native gesture helpers.
// The crate is a binary, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod gestures {
    include!("../src/gestures.rs");
}

use gestures::*;
use std::time::{Duration, Instant};

#[test]
fn two_quick_clicks_make_a_double_click() {
    let t0 = Instant::now();
    let mut timer = ClickTimer::default();
    assert!(!timer.click(t0));
    assert!(timer.click(t0 + Duration::from_millis(200)));
}

#[test]
fn slow_clicks_stay_single() {
    let t0 = Instant::now();
    let mut timer = ClickTimer::default();
    assert!(!timer.click(t0));
    assert!(!timer.click(t0 + Duration::from_millis(450)));
    // The late click starts a new pair.
    assert!(timer.click(t0 + Duration::from_millis(600)));
}

#[test]
fn triple_click_yields_one_double() {
    let t0 = Instant::now();
    let mut timer = ClickTimer::default();
    let fired: Vec<bool> = (0..3)
        .map(|i| timer.click(t0 + Duration::from_millis(100 * i)))
        .collect();
    assert_eq!(fired, vec![false, true, false]);
}

#[test]
fn virtual_scroll_clamps_to_page() {
    let mut s = VirtualScroll::new(1000.0);
    assert_eq!(s.metrics(), (0.0, 3000.0, 1000.0));
    s.scroll_by(wheel_lines_to_pixels(-3.0));
    assert_eq!(s.metrics().0, 120.0);
    s.scroll_by(10_000.0);
    assert_eq!(s.metrics().0, 2000.0);
    s.scroll_by(wheel_lines_to_pixels(500.0));
    assert_eq!(s.metrics().0, 0.0);
}

#[test]
fn resize_keeps_relative_position() {
    let mut s = VirtualScroll::new(1000.0);
    s.scroll_by(1000.0);
    s.set_viewport(500.0);
    let (top, height, vh) = s.metrics();
    assert_eq!((height, vh), (1500.0, 500.0));
    assert!((top - 500.0).abs() < 1e-3);
}
