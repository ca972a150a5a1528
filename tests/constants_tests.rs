// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn dom_ids_match_the_page() {
    assert_eq!(CANVAS_ID, "app-canvas");
    assert_eq!(LAYER_INFO_ID, "info");
    assert_eq!(SCROLL_HINT_ID, "scroll-hint");
    assert_eq!(LOADING_ID, "loading");
    assert_eq!(JOURNEY_START_EVENT, "journeyStart");
    assert!(STAR_CATALOG_URL.ends_with(".bin"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rig_sizes_nest() {
    // knots and tether beads are smaller than the balloons they hang from
    assert!(TETHER_BEAD_RADIUS < KNOT_RADIUS);
    assert!(KNOT_RADIUS < BALLOON_RADIUS);
    assert!(BALLOON_RADIUS < ACTOR_BODY_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn render_constants_are_within_reasonable_bounds() {
    assert!(STAR_BASE_OPACITY > 0.0 && STAR_BASE_OPACITY <= 1.0);
    assert!(STAR_SIZE_SCALE > 0.0);
    assert!(HOTSPOT_PICK_SLACK >= 1.0);
    assert!(INITIAL_INSTANCE_CAPACITY >= skyfall_core::STAR_COUNT);
}
