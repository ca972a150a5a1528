// Host-side tests for flattening the journey into draw instances.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod instances {
    include!("../src/instances.rs");
}

use instances::*;
use skyfall_core::{Journey, JourneyParams, SceneTag, BALLOON_COUNT, TETHER_SEGMENTS};

fn journey(stars: usize) -> Journey {
    Journey::new(JourneyParams {
        star_count: stars,
        ..JourneyParams::default()
    })
}

fn prop_instances(j: &Journey) -> usize {
    let birds = j
        .scene()
        .count_where(|t| matches!(t, SceneTag::Bird { .. }));
    j.scene().len() + birds * 2
}

#[test]
fn stars_are_drawn_in_space() {
    let mut j = journey(100);
    j.advance_frame(0.0);
    let mut out = Vec::new();
    collect_instances(&j, &mut out);
    assert_eq!(out.len(), 100 + prop_instances(&j));
    let glows = out.iter().filter(|i| i.params[0] == SHAPE_GLOW).count();
    assert_eq!(glows, 100);
}

#[test]
fn actor_and_rig_appear_after_start() {
    let mut j = journey(0);
    j.advance_frame(0.0);
    let mut out = Vec::new();
    collect_instances(&j, &mut out);
    let before = out.len();

    j.start();
    j.advance_frame(0.1);
    collect_instances(&j, &mut out);
    let rig = 1 + BALLOON_COUNT * (2 + TETHER_SEGMENTS + 1);
    assert_eq!(out.len(), before + rig);
}

#[test]
fn instances_are_sorted_far_to_near() {
    let mut j = journey(50);
    j.start();
    j.advance_frame(0.0);
    let mut out = Vec::new();
    collect_instances(&j, &mut out);
    let eye = j.camera().camera.eye;
    let d: Vec<f32> = out.iter().map(|i| i.center().distance_squared(eye)).collect();
    assert!(d.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn particles_become_glow_instances() {
    let mut j = journey(0);
    j.burst_sparkles(glam::Vec3::new(1.0, 2.0, 3.0));
    let mut out = Vec::new();
    collect_instances(&j, &mut out);
    let sparkles = out
        .iter()
        .filter(|i| i.params[0] == SHAPE_GLOW && i.center() == glam::Vec3::new(1.0, 2.0, 3.0))
        .count();
    assert_eq!(sparkles, skyfall_core::SPARKLE_COUNT);
}

#[test]
fn instance_layout_is_three_vec4() {
    assert_eq!(std::mem::size_of::<SphereInstance>(), 48);
}
