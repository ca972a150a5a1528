//! The journey controller: owns every piece of mutable state and hands each
//! component only the fields it needs.

use crate::actor::{Actor, ActorEvent, ActorEvents, Lifecycle};
use crate::balloons::BalloonRig;
use crate::camera::{self, CameraMode, CameraRig};
use crate::constants::SPARKLE_COUNT;
use crate::environment::EnvironmentSnapshot;
use crate::layers::{layer_at, LayerDescriptor};
use crate::params::JourneyParams;
use crate::particles::ParticleSystem;
use crate::scene::Scene;
use crate::scroll::{ScrollHint, ScrollState};
use crate::stars::{procedural_stars, StarField, StarRecord};
use crate::world::build_world;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Outcome of one progress integration tick, for the page labels.
#[derive(Clone, Copy, Debug)]
pub struct ProgressReport {
    pub progress: f32,
    pub velocity: f32,
    pub layer: &'static LayerDescriptor,
    pub hint: ScrollHint,
}

/// Outcome of one render frame.
#[derive(Clone, Debug)]
pub struct FrameReport {
    pub events: ActorEvents,
    pub environment: EnvironmentSnapshot,
    pub camera_mode: CameraMode,
}

pub struct Journey {
    pub params: JourneyParams,
    scroll: ScrollState,
    actor: Actor,
    camera: CameraRig,
    particles: ParticleSystem,
    scene: Scene,
    stars: StarField,
    environment: EnvironmentSnapshot,
    started: bool,
    rng: StdRng,
}

impl Journey {
    pub fn new(params: JourneyParams) -> Self {
        let mut rng = StdRng::seed_from_u64(params.seed);
        let balloons = BalloonRig::new(params.balloon_count, &mut rng);
        let scene = build_world(&mut rng);
        let stars = StarField::new(procedural_stars(params.star_count, &mut rng));
        Self {
            params,
            scroll: ScrollState::default(),
            actor: Actor::new(balloons),
            camera: CameraRig::default(),
            particles: ParticleSystem::default(),
            scene,
            stars,
            environment: EnvironmentSnapshot::at(0.0),
            started: false,
            rng,
        }
    }

    /// Handle the page's start signal. Repeated signals are ignored.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.actor.visible = true;
        log::info!("[journey] started");
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Feed one wheel delta. Returns `false` when input is not accepted:
    /// before the start signal and forever after landing.
    pub fn on_wheel(&mut self, delta_y: f32) -> bool {
        if !self.started || self.actor.lifecycle.is_grounded() {
            return false;
        }
        self.scroll.accumulate(delta_y, &self.params);
        true
    }

    /// Progress integration tick, scheduled independently of rendering.
    pub fn tick_progress(&mut self) -> ProgressReport {
        let landed = self.actor.lifecycle.is_grounded();
        self.scroll.integrate(landed, &self.params);
        ProgressReport {
            progress: self.scroll.progress,
            velocity: self.scroll.velocity,
            layer: layer_at(self.scroll.progress),
            hint: self.scroll.hint,
        }
    }

    /// Advance actor, camera, props and particles for a render frame at
    /// `time` seconds since the page loaded.
    pub fn advance_frame(&mut self, time: f32) -> FrameReport {
        let progress = self.scroll.progress;
        let mut events = ActorEvents::new();
        if self.started {
            events = self.actor.update(progress, time, &self.params);
            for ev in &events {
                if let ActorEvent::Landed { position, .. } = ev {
                    self.particles.spawn_explosion(*position, &mut self.rng);
                }
            }
        }

        let mode = CameraMode::for_lifecycle(self.actor.lifecycle);
        let target = camera::plan(mode, progress, self.actor.position);
        self.camera.follow(mode, target, self.params.camera_smoothing);

        self.scene.animate(time);
        self.stars.spin();
        self.particles.step();
        self.environment = EnvironmentSnapshot::at(progress);

        FrameReport {
            events,
            environment: self.environment,
            camera_mode: mode,
        }
    }

    /// Celebrate a successful hotspot pick at `point`.
    pub fn burst_sparkles(&mut self, point: Vec3) {
        self.particles
            .spawn_sparkles(point, SPARKLE_COUNT, &mut self.rng);
    }

    pub fn add_catalog_stars(&mut self, records: Vec<StarRecord>) {
        log::info!("[journey] adding {} catalogue stars", records.len());
        self.stars.extend(records);
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.camera.set_aspect(width, height);
    }

    pub fn progress(&self) -> f32 {
        self.scroll.progress
    }

    pub fn velocity(&self) -> f32 {
        self.scroll.velocity
    }

    pub fn hint(&self) -> ScrollHint {
        self.scroll.hint
    }

    pub fn layer(&self) -> &'static LayerDescriptor {
        layer_at(self.scroll.progress)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.actor.lifecycle
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn environment(&self) -> &EnvironmentSnapshot {
        &self.environment
    }
}

impl Default for Journey {
    fn default() -> Self {
        Self::new(JourneyParams::default())
    }
}
