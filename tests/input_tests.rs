// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::{Vec2, Vec3};
use input::*;

#[test]
fn ray_sphere_intersection_basic() {
    // Ray from origin pointing in +Z direction
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);

    // Sphere at (0, 0, 5) with radius 2
    let t = ray_sphere(ray_origin, ray_dir, Vec3::new(0.0, 0.0, 5.0), 2.0)
        .expect("ray should hit");
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_intersection_miss() {
    // Ray goes along X, sphere sits on Z
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 5.0),
        2.0,
    );
    assert!(result.is_none());
}

#[test]
fn ray_sphere_behind_origin_is_ignored() {
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, -5.0),
        2.0,
    );
    assert!(result.is_none());
}

#[test]
fn ray_sphere_intersection_inside() {
    // Starting inside returns the exit point
    let t = ray_sphere(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 5.0),
        3.0,
    )
    .expect("exit hit");
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn client_to_ndc_maps_corners() {
    let rect = (10.0, 20.0, 200.0, 100.0);
    let ndc = |x: f32, y: f32| {
        client_to_ndc(Vec2::new(x, y), rect.0, rect.1, rect.2, rect.3).expect("non-empty rect")
    };
    assert_eq!(ndc(10.0, 20.0), Vec2::new(-1.0, 1.0));
    assert_eq!(ndc(210.0, 120.0), Vec2::new(1.0, -1.0));
    assert_eq!(ndc(110.0, 70.0), Vec2::new(0.0, 0.0));
}

#[test]
fn client_to_ndc_rejects_empty_rect() {
    assert!(client_to_ndc(Vec2::new(5.0, 5.0), 0.0, 0.0, 0.0, 100.0).is_none());
    assert!(client_to_ndc(Vec2::new(5.0, 5.0), 0.0, 0.0, 100.0, 0.0).is_none());
}

#[test]
fn nearest_hit_prefers_the_closest_sphere() {
    let candidates = [
        ("far", Vec3::new(0.0, 0.0, -50.0), 5.0),
        ("near", Vec3::new(0.0, 0.0, -20.0), 5.0),
        ("off-axis", Vec3::new(30.0, 0.0, -10.0), 5.0),
    ];
    let (key, point) = nearest_hit(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), candidates)
        .expect("something is hit");
    assert_eq!(key, "near");
    assert!(point.distance(Vec3::new(0.0, 0.0, -15.0)) < 1e-4);
}

#[test]
fn nearest_hit_none_when_everything_misses() {
    let candidates = [(0_u8, Vec3::new(10.0, 10.0, -10.0), 1.0)];
    assert!(nearest_hit(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), candidates).is_none());
}
