// Integration tests for the journey controller: start gating, landing,
// floating away and camera handover.

use glam::Vec3;
use skyfall_core::*;

const FRAME: f32 = 1.0 / 60.0;

fn small_journey() -> Journey {
    Journey::new(JourneyParams {
        star_count: 64,
        ..JourneyParams::default()
    })
}

/// Scroll hard until the actor lands. Returns the landing frame's time.
fn scroll_to_landing(j: &mut Journey, t: &mut f32) -> f32 {
    for _ in 0..2000 {
        j.on_wheel(1000.0);
        j.tick_progress();
        let now = *t;
        let report = j.advance_frame(now);
        *t += FRAME;
        if report
            .events
            .iter()
            .any(|e| matches!(e, ActorEvent::Landed { .. }))
        {
            return now;
        }
    }
    panic!("actor never landed");
}

#[test]
fn input_is_ignored_before_start() {
    let mut j = small_journey();
    assert!(!j.on_wheel(500.0));
    let report = j.tick_progress();
    assert_eq!(report.progress, 0.0);
    assert_eq!(report.velocity, 0.0);

    let frame = j.advance_frame(0.5);
    assert!(frame.events.is_empty());
    assert!(!j.actor().visible);
    assert_eq!(j.actor().position, Vec3::ZERO);
}

#[test]
fn start_is_idempotent() {
    let mut j = small_journey();
    j.start();
    j.start();
    assert!(j.is_started());
    assert!(j.actor().visible);
    assert!(j.on_wheel(10.0));
}

#[test]
fn wheel_velocity_is_clamped() {
    let mut j = small_journey();
    j.start();
    for _ in 0..50 {
        j.on_wheel(50_000.0);
    }
    assert_eq!(j.velocity(), VELOCITY_LIMIT);
}

#[test]
fn first_frame_eases_toward_spiral_start() {
    let mut j = small_journey();
    j.start();
    let report = j.advance_frame(0.0);
    assert_eq!(report.camera_mode, CameraMode::Spiral);
    // target is (0, 15, 65); the eye covers 15% of the way from (0, 0, 25)
    let eye = j.camera().camera.eye;
    assert!(eye.distance(Vec3::new(0.0, 2.25, 31.0)) < 1e-4, "{eye:?}");
    assert_eq!(j.camera().camera.target, Vec3::ZERO);
}

#[test]
fn landing_locks_progress_and_input() {
    let mut j = small_journey();
    j.start();
    let mut t = 0.0;
    scroll_to_landing(&mut j, &mut t);

    assert_eq!(j.lifecycle(), Lifecycle::Landed);
    assert!(j.progress() >= 1790.0 / DESCENT_SPAN - 1e-4);
    assert_eq!(j.particles().count(ParticleKind::Explosion), EXPLOSION_COUNT);

    assert!(!j.on_wheel(-5000.0));
    let report = j.tick_progress();
    assert_eq!(report.progress, 1.0);
    assert_eq!(report.velocity, 0.0);
    assert_eq!(report.layer.name, "Green Meadow");
    assert_eq!(report.hint, ScrollHint::Removed);
}

#[test]
fn floats_away_after_the_delay() {
    let mut j = small_journey();
    j.start();
    let mut t = 0.0;
    let landed_at = scroll_to_landing(&mut j, &mut t);
    j.tick_progress();

    let early = j.advance_frame(landed_at + 0.5);
    assert!(early.events.is_empty());
    assert_eq!(j.lifecycle(), Lifecycle::Landed);
    assert_eq!(j.actor().position.y, GROUND_SURFACE_Y);

    let late = j.advance_frame(landed_at + 1.2);
    assert!(late
        .events
        .iter()
        .any(|e| matches!(e, ActorEvent::FloatingAway { .. })));
    assert_eq!(j.lifecycle(), Lifecycle::FloatingAway);

    let later = landed_at + 11.0;
    j.advance_frame(later);
    let y = j.actor().position.y;
    assert!((y - (LANDING_Y + 10.0 * FLOAT_ASCENT_PER_SEC)).abs() < 1e-2, "y={y}");
    let x = j.actor().position.x;
    assert!((x - (later * 0.8).sin() * FLOAT_SWAY).abs() < 1e-4);
}

#[test]
fn explosion_happens_once_and_burns_out() {
    let mut j = small_journey();
    j.start();
    let mut t = 0.0;
    scroll_to_landing(&mut j, &mut t);

    let mut landings = 0;
    for _ in 0..300 {
        j.on_wheel(-1000.0);
        j.tick_progress();
        let report = j.advance_frame(t);
        t += FRAME;
        landings += report
            .events
            .iter()
            .filter(|e| matches!(e, ActorEvent::Landed { .. }))
            .count();
    }
    assert_eq!(landings, 0);
    assert_eq!(j.particles().count(ParticleKind::Explosion), 0);
}

#[test]
fn camera_switches_to_overhead_after_landing() {
    let mut j = small_journey();
    j.start();
    let mut t = 0.0;
    scroll_to_landing(&mut j, &mut t);

    for _ in 0..200 {
        j.tick_progress();
        let report = j.advance_frame(t);
        t += FRAME;
        assert_eq!(report.camera_mode, CameraMode::Overhead);
    }
    let cam = &j.camera().camera;
    assert!(cam.eye.distance(OVERHEAD_CAMERA) < 1e-2, "{:?}", cam.eye);
    assert_eq!(cam.target, j.actor().position);
}

#[test]
fn sparkles_burst_at_the_pick_point() {
    let mut j = small_journey();
    let at = Vec3::new(30.0, -1150.0, -30.0);
    j.burst_sparkles(at);
    assert_eq!(j.particles().count(ParticleKind::Sparkle), SPARKLE_COUNT);
    assert!(j.particles().iter().all(|p| p.position == at));
}

#[test]
fn catalogue_stars_extend_the_field() {
    let mut j = small_journey();
    let before = j.stars().stars.len();
    j.add_catalog_stars(vec![
        StarRecord {
            position: [0.0, 10.0, 0.0],
            size: 2.0,
            color: [1.0, 1.0, 1.0, 1.0],
        };
        5
    ]);
    assert_eq!(j.stars().stars.len(), before + 5);
}

#[test]
fn same_seed_builds_the_same_world() {
    let a = small_journey();
    let b = small_journey();
    for (id, obj) in a.scene().iter() {
        let other = b.scene().get(id).expect("object present in both");
        assert_eq!(obj.tag, other.tag);
        assert_eq!(obj.position, other.position);
    }
    assert_eq!(a.stars().stars, b.stars().stars);
}

#[test]
fn viewport_sets_aspect() {
    let mut j = small_journey();
    j.set_viewport(800.0, 400.0);
    assert_eq!(j.camera().camera.aspect, 2.0);
    j.set_viewport(0.0, 400.0);
    assert_eq!(j.camera().camera.aspect, 2.0);
}
