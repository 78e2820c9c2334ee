// Host-side tests for the event-driven state plumbing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod state {
    include!("../src/state.rs");
}

use constants::*;
use state::*;

#[test]
fn pointer_offset_normalizes_to_centered_range() {
    let vp = ViewportSize {
        width: 1000.0,
        height: 500.0,
    };

    let top_left = PointerOffset::from_client(0.0, 0.0, vp);
    assert_eq!(top_left.x, -0.5);
    assert_eq!(top_left.y, -0.5);

    let center = PointerOffset::from_client(500.0, 250.0, vp);
    assert_eq!(center.x, 0.0);
    assert_eq!(center.y, 0.0);

    let bottom_right = PointerOffset::from_client(1000.0, 500.0, vp);
    assert_eq!(bottom_right.x, 0.5);
    assert_eq!(bottom_right.y, 0.5);
}

#[test]
fn pointer_offset_clamps_out_of_viewport_coordinates() {
    let vp = ViewportSize {
        width: 800.0,
        height: 600.0,
    };
    let outside = PointerOffset::from_client(1600.0, -300.0, vp);
    assert_eq!(outside.x, 0.5);
    assert_eq!(outside.y, -0.5);
}

#[test]
fn section_is_nearest_multiple_of_viewport_height() {
    let h = 800.0;
    assert_eq!(section_for_offset(0.0, h), 0);
    assert_eq!(section_for_offset(0.4 * h, h), 0);
    assert_eq!(section_for_offset(0.6 * h, h), 1);
    assert_eq!(section_for_offset(1.0 * h, h), 1);
    assert_eq!(section_for_offset(1.6 * h, h), 2);
    assert_eq!(section_for_offset(2.0 * h, h), 2);
}

#[test]
fn section_stays_within_mesh_range() {
    let h = 800.0;
    // Far past the last section
    assert_eq!(section_for_offset(50.0 * h, h), SECTION_COUNT - 1);
    // Rubber-band scrolling above the top
    assert_eq!(section_for_offset(-300.0, h), 0);
}

#[test]
fn apply_scroll_reports_each_crossing_exactly_once() {
    let mut app = AppState::new(ViewportSize {
        width: 1200.0,
        height: 800.0,
    });

    // Events inside section 0 never retrigger
    assert_eq!(app.apply_scroll(10.0), None);
    assert_eq!(app.apply_scroll(200.0), None);

    // One crossing, one report
    assert_eq!(app.apply_scroll(700.0), Some(1));
    assert_eq!(app.apply_scroll(750.0), None);
    assert_eq!(app.scroll.raw_offset, 750.0);

    // Back up across the same boundary
    assert_eq!(app.apply_scroll(100.0), Some(0));
}

#[test]
fn apply_resize_updates_viewport() {
    let mut app = AppState::new(ViewportSize {
        width: 1200.0,
        height: 800.0,
    });
    app.apply_resize(640.0, 480.0);
    assert_eq!(app.viewport.width, 640.0);
    assert_eq!(app.viewport.height, 480.0);
}

#[test]
fn pixel_ratio_never_exceeds_two() {
    assert_eq!(clamp_pixel_ratio(1.0), 1.0);
    assert_eq!(clamp_pixel_ratio(1.5), 1.5);
    assert_eq!(clamp_pixel_ratio(2.0), 2.0);
    assert_eq!(clamp_pixel_ratio(3.0), 2.0);
    assert_eq!(clamp_pixel_ratio(4.0), 2.0);
}

#[test]
fn hex_color_parsing() {
    let tint = parse_hex_color("#ffeded").unwrap();
    assert_eq!(tint[0], 1.0);
    assert!((tint[1] - 237.0 / 255.0).abs() < 1e-6);
    assert!((tint[2] - 237.0 / 255.0).abs() < 1e-6);

    assert_eq!(parse_hex_color("#000000").unwrap(), [0.0, 0.0, 0.0]);
    assert_eq!(parse_hex_color("#ffffff").unwrap(), [1.0, 1.0, 1.0]);

    assert!(parse_hex_color("ffeded").is_none());
    assert!(parse_hex_color("#ffed").is_none());
    assert!(parse_hex_color("#gggggg").is_none());
    assert!(parse_hex_color("").is_none());
}

#[test]
fn hex_color_rejects_non_ascii_without_panicking() {
    // 6 bytes but not 6 ASCII hex digits; the panel feeds raw input values
    // here, so anything malformed must come back as None
    assert!(parse_hex_color("#a\u{20ac}bc").is_none());
    assert!(parse_hex_color("#\u{20ac}\u{20ac}").is_none());
    assert!(parse_hex_color("#ffede\u{301}").is_none());
    assert!(parse_hex_color("#日本語").is_none());
}

#[test]
fn default_tint_constant_parses() {
    assert!(parse_hex_color(DEFAULT_TINT_HEX).is_some());
}
