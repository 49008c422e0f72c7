// Host-side tests for pure viewport helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod viewport {
    include!("../src/viewport.rs");
}

use viewport::*;

#[test]
fn backing_size_scales_by_device_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(801.5, 600.2, 1.0), (801, 600));
}

#[test]
fn backing_size_never_returns_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(-10.0, 300.0, 1.0), (1, 300));
}

#[test]
fn backing_size_ignores_bogus_ratio() {
    assert_eq!(backing_size(100.0, 50.0, 0.0), (100, 50));
    assert_eq!(backing_size(100.0, 50.0, f64::NAN), (100, 50));
}

#[test]
fn local_point_offsets_by_element_origin() {
    assert_eq!(local_point(150.0, 80.0, 100.0, 20.0), (50.0, 60.0));
    // Outside the element is allowed; the input layer clamps later.
    assert_eq!(local_point(10.0, 5.0, 100.0, 20.0), (-90.0, -15.0));
}

#[test]
fn model_url_prefers_non_blank_attribute() {
    let default = "/model/icy_dragon.glb";
    assert_eq!(model_url(Some("/assets/other.glb"), default), "/assets/other.glb");
    assert_eq!(model_url(Some("  /x.glb "), default), "/x.glb");
    assert_eq!(model_url(Some("   "), default), default);
    assert_eq!(model_url(None, default), default);
}
