//! Prop placement for the descent.
//!
//! Geometry detail is left to the renderer; this only decides where things
//! are, how big they are and which tag drives them.

use crate::constants::*;
use crate::scene::{HotspotAction, Scene, SceneObject, SceneTag};
use glam::{EulerRot, Quat, Vec3};
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, TAU};

const HIGH_CLOUD_COUNT: usize = 40;
const GROUND_CLOUD_COUNT: usize = 20;
const BIRD_COUNT: usize = 8;

const BANNERS: [(&str, Vec3); 3] = [
    ("CHECK OUT MY RESUME!", Vec3::new(-200.0, -1000.0, -150.0)),
    ("HIRE ME!", Vec3::new(250.0, -1100.0, -200.0)),
    ("PORTFOLIO 2024", Vec3::new(-180.0, -1200.0, 180.0)),
];
const BANNER_HEADINGS: [f32; 3] = [FRAC_PI_3, -FRAC_PI_4, FRAC_PI_2];

// Clickable signs sit at the altitude of the first two pause bands.
const HOTSPOTS: [(HotspotAction, Vec3); 2] = [
    (HotspotAction::ShowResumes, Vec3::new(-30.0, -345.0, -30.0)),
    (HotspotAction::ShowProjects, Vec3::new(30.0, -1150.0, -30.0)),
];
const HOTSPOT_RADIUS: f32 = 12.0;

pub fn build_world(rng: &mut impl Rng) -> Scene {
    let mut scene = Scene::default();

    scene.add(SceneObject::new(
        SceneTag::Globe,
        GROUND_CENTER,
        GROUND_RADIUS,
        rgb(0x3a7d44),
    ));
    scene.add(
        SceneObject::new(SceneTag::CloudShell, GROUND_CENTER, GROUND_RADIUS + 10.0, rgb(0xffffff))
            .with_opacity(0.4),
    );
    scene.add(
        SceneObject::new(SceneTag::Sun, Vec3::new(-500.0, 300.0, -400.0), 200.0, rgb(0xffffcc))
            .emissive(),
    );
    scene.add(SceneObject::new(
        SceneTag::Moon,
        Vec3::new(400.0, 200.0, -600.0),
        50.0,
        rgb(0xc8c8c8),
    ));

    add_rocket(&mut scene, rng);
    add_aircraft(&mut scene);
    add_birds(&mut scene, rng);
    add_clouds(&mut scene, rng);

    for (action, at) in HOTSPOTS {
        scene.add(SceneObject::new(SceneTag::Hotspot(action), at, HOTSPOT_RADIUS, rgb(0xffd700)).emissive());
    }

    log::info!("[world] built {} props", scene.len());
    scene
}

fn add_rocket(scene: &mut Scene, rng: &mut impl Rng) {
    let at = Vec3::new(-200.0, 150.0, -400.0);
    let rotation = Vec3::new(
        0.0,
        -FRAC_PI_3 + rng.gen::<f32>() * FRAC_PI_2,
        FRAC_PI_4 + rng.gen::<f32>() * 0.5,
    );
    let scale = Vec3::new(
        5.0 + rng.gen::<f32>() * 3.0,
        5.0 + rng.gen::<f32>() * 3.0,
        5.0 + rng.gen::<f32>() * 3.0,
    );
    let mut body = SceneObject::new(SceneTag::Rocket, at + Vec3::Y, 1.5, rgb(0xe0e0e0)).with_scale(scale);
    body.rotation = rotation;
    scene.add(body);

    // exhaust hangs one unit below the body along the rocket's own axis
    let orient = Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z);
    let flame_at = at + orient * (Vec3::new(0.0, -1.0, 0.0) * scale);
    let mut flame = SceneObject::new(SceneTag::RocketFlame, flame_at, 0.8, rgb(0xff6600))
        .with_scale(scale)
        .with_opacity(0.6)
        .emissive();
    flame.rotation = rotation;
    scene.add(flame);
}

fn add_aircraft(scene: &mut Scene) {
    let mut airliner = SceneObject::new(
        SceneTag::Airliner,
        Vec3::new(-150.0, -800.0, -200.0),
        4.0,
        rgb(0xeeeeee),
    )
    .with_scale(Vec3::splat(3.0));
    airliner.rotation.y = FRAC_PI_4;
    scene.add(airliner);

    for ((message, at), heading) in BANNERS.into_iter().zip(BANNER_HEADINGS) {
        let mut plane = SceneObject::new(SceneTag::BannerPlane { message }, at, 4.0, rgb(0xeeeeee))
            .with_scale(Vec3::splat(3.0));
        plane.rotation.y = heading;
        scene.add(plane);
    }
}

fn add_birds(scene: &mut Scene, rng: &mut impl Rng) {
    for i in 0..BIRD_COUNT {
        let angle = i as f32 / BIRD_COUNT as f32 * TAU;
        let radius = 100.0 + rng.gen::<f32>() * 150.0;
        let at = Vec3::new(
            angle.cos() * radius,
            -1400.0 + rng.gen::<f32>() * 200.0,
            angle.sin() * radius,
        );
        let mut bird = SceneObject::new(
            SceneTag::Bird {
                index: i,
                wing_phase: i as f32 * 0.5,
            },
            at,
            0.3,
            rgb(0x333333),
        )
        .with_scale(Vec3::splat(3.0));
        bird.rotation.y = -angle;
        scene.add(bird);
    }
}

fn add_clouds(scene: &mut Scene, rng: &mut impl Rng) {
    for i in 0..HIGH_CLOUD_COUNT {
        let at = Vec3::new(
            (rng.gen::<f32>() - 0.5) * 600.0,
            -1200.0 + rng.gen::<f32>() * 100.0,
            (rng.gen::<f32>() - 0.5) * 600.0,
        );
        let radius = 16.0 + rng.gen::<f32>() * 22.0;
        let opacity = 0.7 + rng.gen::<f32>() * 0.2;
        scene.add(
            SceneObject::new(SceneTag::Cloud { index: i }, at, radius, rgb(0xffffff))
                .with_scale(Vec3::new(1.2, 0.9, 1.1))
                .with_opacity(opacity),
        );
    }
    for i in 0..GROUND_CLOUD_COUNT {
        let angle = rng.gen::<f32>() * TAU;
        let radius = 200.0 + rng.gen::<f32>() * 250.0;
        let at = Vec3::new(
            angle.cos() * radius,
            -1700.0 + rng.gen::<f32>() * 50.0,
            angle.sin() * radius,
        );
        let size = 22.0 + rng.gen::<f32>() * 28.0;
        let opacity = 0.65 + rng.gen::<f32>() * 0.2;
        scene.add(
            SceneObject::new(SceneTag::GroundCloud { index: i }, at, size, rgb(0xffffff))
                .with_scale(Vec3::new(1.3, 0.85, 1.15))
                .with_opacity(opacity),
        );
    }
}
