// Integration tests for prop placement, tag-driven animation and hotspots.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use skyfall_core::world::build_world;
use skyfall_core::*;
use std::f32::consts::{FRAC_PI_2, PI};

fn world() -> Scene {
    build_world(&mut StdRng::seed_from_u64(42))
}

#[test]
fn world_contains_every_prop_group() {
    let s = world();
    assert_eq!(s.count_where(|t| matches!(t, SceneTag::Globe)), 1);
    assert_eq!(s.count_where(|t| matches!(t, SceneTag::CloudShell)), 1);
    assert_eq!(s.count_where(|t| matches!(t, SceneTag::Sun)), 1);
    assert_eq!(s.count_where(|t| matches!(t, SceneTag::Moon)), 1);
    assert_eq!(s.count_where(|t| matches!(t, SceneTag::Rocket)), 1);
    assert_eq!(s.count_where(|t| matches!(t, SceneTag::RocketFlame)), 1);
    assert_eq!(s.count_where(|t| matches!(t, SceneTag::Airliner)), 1);
    assert_eq!(s.count_where(|t| matches!(t, SceneTag::BannerPlane { .. })), 3);
    assert_eq!(s.count_where(|t| matches!(t, SceneTag::Bird { .. })), 8);
    assert_eq!(s.count_where(|t| matches!(t, SceneTag::Cloud { .. })), 40);
    assert_eq!(s.count_where(|t| matches!(t, SceneTag::GroundCloud { .. })), 20);
    assert_eq!(s.count_where(|t| matches!(t, SceneTag::Hotspot(_))), 2);
    assert_eq!(s.len(), 80);
}

#[test]
fn globe_top_is_the_landing_surface() {
    let s = world();
    let (_, globe) = s
        .iter()
        .find(|(_, o)| o.tag == SceneTag::Globe)
        .expect("globe");
    assert_eq!(globe.position.y + globe.world_radius(), GROUND_SURFACE_Y);
}

#[test]
fn banners_carry_their_messages() {
    let s = world();
    let mut messages: Vec<&str> = s
        .iter()
        .filter_map(|(_, o)| match o.tag {
            SceneTag::BannerPlane { message } => Some(message),
            _ => None,
        })
        .collect();
    messages.sort_unstable();
    assert_eq!(messages, ["CHECK OUT MY RESUME!", "HIRE ME!", "PORTFOLIO 2024"]);
}

#[test]
fn hotspots_dispatch_to_page_callbacks() {
    let s = world();
    let mut names: Vec<&str> = s.hotspots().map(|(_, _, a)| a.callback_name()).collect();
    names.sort_unstable();
    assert_eq!(names, ["showProjects", "showResumes"]);
}

#[test]
fn hidden_hotspots_are_not_pickable() {
    let mut s = world();
    let id = s.hotspots().map(|(id, _, _)| id).next().expect("hotspot");
    if let Some(o) = s.get_mut(id) {
        o.visible = false;
    }
    assert_eq!(s.hotspots().count(), 1);
}

#[test]
fn clouds_wrap_around_the_far_edge() {
    let mut s = Scene::default();
    let id = s.add(SceneObject::new(
        SceneTag::Cloud { index: 0 },
        Vec3::new(299.9, -1150.0, 0.0),
        20.0,
        rgb(0xffffff),
    ));
    // sin(pi/2) pushes the cloud +0.2 past the edge
    s.animate(FRAC_PI_2);
    let cloud = s.get(id).expect("cloud");
    assert_eq!(cloud.position.x, -300.0);
    assert!((cloud.rotation.y - 0.001).abs() < 1e-7);
}

#[test]
fn rocket_flame_pulses() {
    let mut s = Scene::default();
    let id = s.add(SceneObject::new(SceneTag::RocketFlame, Vec3::ZERO, 0.8, rgb(0xff6600)));
    s.animate(0.0);
    let f = s.get(id).expect("flame");
    assert!((f.scale.y - 1.0).abs() < 1e-6);
    assert!((f.opacity - 0.6).abs() < 1e-6);

    s.animate(PI / 20.0);
    let f = s.get(id).expect("flame");
    assert!((f.scale.y - 1.3).abs() < 1e-5);
    assert!((f.opacity - 0.8).abs() < 1e-5);
}

#[test]
fn birds_flap_within_range() {
    let mut s = world();
    for step in 0..200 {
        s.animate(step as f32 * 0.05);
        for (_, o) in s.iter() {
            if matches!(o.tag, SceneTag::Bird { .. }) {
                assert!(o.flap.abs() <= 0.5 + 1e-6);
            }
        }
    }
}

#[test]
fn static_props_do_not_move() {
    let mut s = world();
    let before: Vec<(ObjectId, Vec3)> = s
        .iter()
        .filter(|(_, o)| matches!(o.tag, SceneTag::Sun | SceneTag::Moon | SceneTag::Globe))
        .map(|(id, o)| (id, o.position))
        .collect();
    for step in 0..50 {
        s.animate(step as f32);
    }
    for (id, pos) in before {
        assert_eq!(s.get(id).expect("prop").position, pos);
    }
}

#[test]
fn removed_objects_are_gone() {
    let mut s = Scene::default();
    let a = s.add(SceneObject::new(SceneTag::Moon, Vec3::ZERO, 1.0, [1.0; 3]));
    let b = s.add(SceneObject::new(SceneTag::Sun, Vec3::ONE, 1.0, [1.0; 3]));
    assert_ne!(a, b);
    assert!(s.remove(a).is_some());
    assert!(s.get(a).is_none());
    assert_eq!(s.len(), 1);
}
