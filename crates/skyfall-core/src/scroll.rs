//! Wheel input accumulation and progress integration.

use crate::constants::*;
use crate::params::JourneyParams;

/// Velocity multiplier for a wheel event at `progress`.
///
/// Four narrow bands slow the descent where there is something to look at;
/// elsewhere the gain tapers linearly toward the ground.
pub fn slowdown_factor(progress: f32) -> f32 {
    let p = progress;
    if p > 0.10 && p < 0.20 {
        0.30
    } else if p > 0.40 && p < 0.60 {
        0.35
    } else if p > 0.65 && p < 0.75 {
        0.50
    } else if p > 0.85 && p < 0.95 {
        0.25
    } else {
        1.0 - p * TAPER_SLOPE
    }
}

/// Scroll hint affordance. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScrollHint {
    #[default]
    Visible,
    Faded,
    Removed,
}

impl ScrollHint {
    pub fn advance(self, progress: f32) -> Self {
        let next = if progress >= HINT_REMOVE_PROGRESS {
            ScrollHint::Removed
        } else if progress > HINT_FADE_PROGRESS {
            ScrollHint::Faded
        } else {
            ScrollHint::Visible
        };
        self.max(next)
    }
}

/// Progress and its velocity. The integrator is the only writer of
/// `progress`; wheel events only touch `velocity`.
#[derive(Clone, Debug, Default)]
pub struct ScrollState {
    pub progress: f32,
    pub velocity: f32,
    pub hint: ScrollHint,
}

impl ScrollState {
    /// Fold one wheel delta into the velocity. Returns the applied increment.
    pub fn accumulate(&mut self, delta_y: f32, params: &JourneyParams) -> f32 {
        let before = self.velocity;
        let factor = slowdown_factor(self.progress);
        self.velocity = (self.velocity + delta_y * params.wheel_gain * factor)
            .clamp(-params.velocity_limit, params.velocity_limit);
        self.velocity - before
    }

    /// One integration step. `landed` pins progress to the end for good.
    pub fn integrate(&mut self, landed: bool, params: &JourneyParams) {
        self.progress += self.velocity;
        if landed {
            self.progress = 1.0;
            self.velocity = 0.0;
        } else {
            self.progress = self.progress.clamp(0.0, 1.0);
        }
        if self.velocity.abs() > VELOCITY_LOG_THRESHOLD {
            log::debug!(
                "[scroll] velocity={:.5} progress={:.3}",
                self.velocity,
                self.progress
            );
        }
        self.velocity *= params.velocity_decay;
        self.hint = self.hint.advance(self.progress);
    }
}
