// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn centre_maps_to_origin() {
    let ndc = normalized_pointer(Vec2::new(400.0, 300.0), 800.0, 600.0).expect("ndc");
    assert_eq!(ndc, Vec2::ZERO);
}

#[test]
fn corners_map_to_unit_square_with_y_up() {
    let tl = normalized_pointer(Vec2::new(0.0, 0.0), 800.0, 600.0).expect("ndc");
    assert_eq!(tl, Vec2::new(-1.0, 1.0));
    let br = normalized_pointer(Vec2::new(800.0, 600.0), 800.0, 600.0).expect("ndc");
    assert_eq!(br, Vec2::new(1.0, -1.0));
}

#[test]
fn positions_outside_are_clamped() {
    let ndc = normalized_pointer(Vec2::new(-50.0, 900.0), 800.0, 600.0).expect("ndc");
    assert_eq!(ndc, Vec2::new(-1.0, -1.0));
}

#[test]
fn empty_surface_has_no_pointer() {
    assert!(normalized_pointer(Vec2::new(10.0, 10.0), 0.0, 600.0).is_none());
    assert!(normalized_pointer(Vec2::new(10.0, 10.0), 800.0, 0.0).is_none());
    assert!(normalized_pointer(Vec2::new(10.0, 10.0), f64::NAN, 600.0).is_none());
}

#[test]
fn sample_is_relative_to_element_origin() {
    // element at (100, 50), 200x100 CSS pixels; pointer at its centre
    let s = sample_from_rect(200.0, 100.0, 100.0, 50.0, 200.0, 100.0).expect("sample");
    assert_eq!(s.css, Vec2::new(100.0, 50.0));
    assert_eq!(s.ndc, Vec2::ZERO);

    // a quarter of the way across and down
    let s = sample_from_rect(150.0, 75.0, 100.0, 50.0, 200.0, 100.0).expect("sample");
    assert_eq!(s.css, Vec2::new(50.0, 25.0));
    assert!((s.ndc - Vec2::new(-0.5, 0.5)).length() < 1e-6);
}

#[test]
fn surface_px_subtracts_offset() {
    assert_eq!(surface_css_px(15.5, 20.0, 5.5, 10.0), Vec2::new(10.0, 10.0));
}
