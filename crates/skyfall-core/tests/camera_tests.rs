// Integration tests for the spiral and overhead camera planner.

use glam::Vec3;
use skyfall_core::camera::plan;
use skyfall_core::*;

fn close(a: Vec3, b: Vec3) -> bool {
    a.distance(b) < 1e-2
}

#[test]
fn spiral_halfway_sits_behind_the_actor() {
    let actor = Vec3::new(0.0, -1150.0, 0.0);
    let t = plan(CameraMode::Spiral, 0.5, actor);
    // angle 3π, radius 40, height +10, shifted 15 toward +z
    assert!(close(t.position, Vec3::new(0.0, -1140.0, -25.0)), "{:?}", t.position);
    assert!(close(t.look_at, Vec3::new(0.0, -1175.0, 0.0)), "{:?}", t.look_at);
}

#[test]
fn spiral_quarter_swings_to_the_side() {
    let actor = Vec3::new(3.0, -575.0, -2.0);
    let t = plan(CameraMode::Spiral, 0.25, actor);
    // angle 1.5π, radius 45, height +12.5
    assert!(close(t.position, Vec3::new(-45.0, -562.5, 15.0)), "{:?}", t.position);
    assert!(close(t.look_at, Vec3::new(3.0, -587.5, -2.0)), "{:?}", t.look_at);
}

#[test]
fn spiral_radius_and_height_taper_with_progress() {
    let actor = Vec3::ZERO;
    let start = plan(CameraMode::Spiral, 0.0, actor);
    let end = plan(CameraMode::Spiral, 1.0, actor);
    let horizontal = |p: Vec3| Vec3::new(p.x, 0.0, p.z - SPIRAL_Z_SHIFT).length();
    assert!((horizontal(start.position) - 50.0).abs() < 1e-3);
    assert!((horizontal(end.position) - 30.0).abs() < 1e-3);
    assert!((start.position.y - 15.0).abs() < 1e-4);
    assert!((end.position.y - 5.0).abs() < 1e-4);
    assert!((end.look_at.y + LOOK_AHEAD_DROP).abs() < 1e-4);
}

#[test]
fn overhead_is_fixed_and_tracks_the_actor() {
    let actor = Vec3::new(2.0, -1700.0, 1.0);
    let t = plan(CameraMode::Overhead, 0.3, actor);
    assert_eq!(t.position, OVERHEAD_CAMERA);
    assert_eq!(t.look_at, actor);
}

#[test]
fn follow_moves_fifteen_percent_of_the_gap() {
    let mut rig = CameraRig::default();
    let start = rig.camera.eye;
    let target = CameraTarget {
        position: start + Vec3::new(100.0, 0.0, 0.0),
        look_at: Vec3::ZERO,
    };
    rig.follow(CameraMode::Spiral, target, 0.15);
    assert!(close(rig.camera.eye, start + Vec3::new(15.0, 0.0, 0.0)));
    assert_eq!(rig.camera.target, Vec3::ZERO);
    assert_eq!(rig.mode, Some(CameraMode::Spiral));
}
