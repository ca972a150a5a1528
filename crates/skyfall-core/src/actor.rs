//! The falling actor and its lifecycle.

use crate::balloons::BalloonRig;
use crate::constants::*;
use crate::params::JourneyParams;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Falling,
    Landed,
    FloatingAway,
}

impl Lifecycle {
    /// Landed or already floating away; both pin progress and the camera.
    #[inline]
    pub fn is_grounded(self) -> bool {
        !matches!(self, Lifecycle::Falling)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActorEvent {
    Landed { position: Vec3, time: f32 },
    FloatingAway { time: f32 },
    Relaunched,
}

pub type ActorEvents = SmallVec<[ActorEvent; 2]>;

/// Height on the descent line for `progress`, never below the ground surface.
#[inline]
pub fn descent_height(progress: f32) -> f32 {
    (-progress * DESCENT_SPAN).max(GROUND_SURFACE_Y)
}

#[derive(Clone, Debug)]
pub struct Actor {
    pub position: Vec3,
    /// Euler angles in radians (XYZ).
    pub rotation: Vec3,
    pub lifecycle: Lifecycle,
    pub landing_time: f32,
    pub visible: bool,
    pub balloons: BalloonRig,
}

impl Actor {
    pub fn new(balloons: BalloonRig) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            lifecycle: Lifecycle::Falling,
            landing_time: 0.0,
            visible: false,
            balloons,
        }
    }

    /// Advance one render frame.
    ///
    /// The descent height is applied first and drives the landing checks;
    /// floating motion then overrides the height for the rest of the frame.
    pub fn update(&mut self, progress: f32, time: f32, params: &JourneyParams) -> ActorEvents {
        let mut events = ActorEvents::new();
        let descent_y = descent_height(progress);
        self.position.y = descent_y;

        if descent_y <= LANDING_Y && self.lifecycle == Lifecycle::Falling {
            self.lifecycle = Lifecycle::Landed;
            self.landing_time = time;
            self.rotation = Vec3::ZERO;
            log::info!(
                "[actor] landed at y={:.1} t={:.2}",
                self.position.y,
                time
            );
            events.push(ActorEvent::Landed {
                position: self.position,
                time,
            });
        } else if descent_y > LANDING_Y && self.lifecycle.is_grounded() {
            self.lifecycle = Lifecycle::Falling;
            log::info!("[actor] left the ground; falling again");
            events.push(ActorEvent::Relaunched);
        }

        if self.lifecycle == Lifecycle::Falling {
            self.rotation.y += SPIN_PER_FRAME;
            self.rotation.x = (time * 0.5).sin() * 0.2 + progress * 0.5;
            self.rotation.z = (time * 0.3).cos() * 0.15;
        }

        if self.lifecycle == Lifecycle::Landed && time - self.landing_time > params.float_delay_sec {
            self.lifecycle = Lifecycle::FloatingAway;
            log::info!("[actor] floating away t={:.2}", time);
            events.push(ActorEvent::FloatingAway { time });
        }

        if self.lifecycle == Lifecycle::FloatingAway {
            let float_time = time - self.landing_time - params.float_delay_sec;
            self.position.y = LANDING_Y + float_time * params.float_ascent_per_sec;
            self.position.x = (time * 0.8).sin() * FLOAT_SWAY;
            self.rotation.y += SPIN_PER_FRAME;
            self.rotation.x = (time * 2.0).sin() * 0.1;
            self.rotation.z = (time * 1.5).cos() * 0.1;
        }

        self.balloons.update(time);
        events
    }
}
