//! Camera description and the per-frame camera planner.
//!
//! The planner has two modes. While the actor falls the camera traces a
//! three-turn helix around it that tightens and drops as progress grows,
//! looking below the actor. Once grounded the camera parks at a fixed
//! overhead point and only the look-at follows the actor. In both modes
//! the eye is eased toward the target rather than snapped.

use crate::actor::Lifecycle;
use crate::constants::*;
use glam::{Mat4, Vec2, Vec3, Vec4};
use std::f32::consts::TAU;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: INITIAL_CAMERA,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point in normalized device coordinates.
    ///
    /// Returns `(ray_origin, ray_direction)` with a unit direction.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        (self.eye, (p1 - self.eye).normalize())
    }
}

/// Where the camera wants to be this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTarget {
    pub position: Vec3,
    pub look_at: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMode {
    Spiral,
    Overhead,
}

impl CameraMode {
    pub fn for_lifecycle(lifecycle: Lifecycle) -> Self {
        if lifecycle.is_grounded() {
            CameraMode::Overhead
        } else {
            CameraMode::Spiral
        }
    }
}

/// Compute the camera target from progress and the actor position.
pub fn plan(mode: CameraMode, progress: f32, actor: Vec3) -> CameraTarget {
    match mode {
        CameraMode::Overhead => CameraTarget {
            position: OVERHEAD_CAMERA,
            look_at: actor,
        },
        CameraMode::Spiral => {
            let angle = progress * TAU * SPIRAL_TURNS;
            let radius = SPIRAL_RADIUS_NEAR + (1.0 - progress) * SPIRAL_RADIUS_SPAN;
            let height = SPIRAL_HEIGHT_START - progress * SPIRAL_HEIGHT_SPAN;
            CameraTarget {
                position: Vec3::new(
                    angle.sin() * radius,
                    actor.y + height,
                    angle.cos() * radius + SPIRAL_Z_SHIFT,
                ),
                look_at: Vec3::new(actor.x, actor.y - progress * LOOK_AHEAD_DROP, actor.z),
            }
        }
    }
}

/// Smoothed camera following planner targets.
#[derive(Clone, Debug, Default)]
pub struct CameraRig {
    pub camera: Camera,
    pub mode: Option<CameraMode>,
}

impl CameraRig {
    /// Move `smoothing` of the remaining distance toward `target`; the
    /// look-at is applied directly.
    pub fn follow(&mut self, mode: CameraMode, target: CameraTarget, smoothing: f32) {
        if self.mode != Some(mode) {
            log::info!("[camera] mode {:?}", mode);
            self.mode = Some(mode);
        }
        self.camera.eye = self.camera.eye.lerp(target.position, smoothing);
        self.camera.target = target.look_at;
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.camera.aspect = width / height;
        }
    }
}
