use crate::constants::*;

/// Host-overridable tuning for a journey.
#[derive(Clone, Debug)]
pub struct JourneyParams {
    pub seed: u64,
    pub wheel_gain: f32,
    pub velocity_limit: f32,
    pub velocity_decay: f32,
    pub camera_smoothing: f32,
    pub float_delay_sec: f32,
    pub float_ascent_per_sec: f32,
    pub balloon_count: usize,
    pub star_count: usize,
}

impl Default for JourneyParams {
    fn default() -> Self {
        Self {
            seed: 42,
            wheel_gain: WHEEL_GAIN,
            velocity_limit: VELOCITY_LIMIT,
            velocity_decay: VELOCITY_DECAY,
            camera_smoothing: CAMERA_SMOOTHING,
            float_delay_sec: FLOAT_DELAY_SEC,
            float_ascent_per_sec: FLOAT_ASCENT_PER_SEC,
            balloon_count: BALLOON_COUNT,
            star_count: STAR_COUNT,
        }
    }
}

impl JourneyParams {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}
