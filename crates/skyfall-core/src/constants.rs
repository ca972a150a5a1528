use glam::Vec3;

// Journey tuning shared by the web frontend and the host tests.

// Progress integration
pub const VELOCITY_LIMIT: f32 = 0.01; // |velocity| never exceeds this
pub const VELOCITY_DECAY: f32 = 0.95; // multiplicative decay per integration step
pub const WHEEL_GAIN: f32 = 0.000_05; // velocity per wheel delta unit
pub const VELOCITY_LOG_THRESHOLD: f32 = 0.001;

// Slowdown taper applied outside the pause bands
pub const TAPER_SLOPE: f32 = 0.4;

// Scroll hint
pub const HINT_FADE_PROGRESS: f32 = 0.05;
pub const HINT_REMOVE_PROGRESS: f32 = 0.99;

// World layout (vertical axis)
pub const DESCENT_SPAN: f32 = 2300.0; // world units travelled for progress 0 -> 1
pub const GROUND_CENTER: Vec3 = Vec3::new(0.0, -2300.0, 0.0);
pub const GROUND_RADIUS: f32 = 500.0;
pub const GROUND_SURFACE_Y: f32 = GROUND_CENTER.y + GROUND_RADIUS; // -1800
pub const LANDING_TOLERANCE: f32 = 10.0;
pub const LANDING_Y: f32 = GROUND_SURFACE_Y + LANDING_TOLERANCE; // -1790

// Actor motion
pub const SPIN_PER_FRAME: f32 = 0.02;
pub const FLOAT_DELAY_SEC: f32 = 1.0;
pub const FLOAT_ASCENT_PER_SEC: f32 = 3.0;
pub const FLOAT_SWAY: f32 = 3.0;
pub const ACTOR_SCALE: f32 = 0.8;

// Camera
pub const CAMERA_SMOOTHING: f32 = 0.15; // fraction of remaining distance per frame
pub const SPIRAL_TURNS: f32 = 3.0;
pub const SPIRAL_RADIUS_NEAR: f32 = 30.0;
pub const SPIRAL_RADIUS_SPAN: f32 = 20.0;
pub const SPIRAL_Z_SHIFT: f32 = 15.0;
pub const SPIRAL_HEIGHT_START: f32 = 15.0;
pub const SPIRAL_HEIGHT_SPAN: f32 = 10.0;
pub const LOOK_AHEAD_DROP: f32 = 50.0;
pub const OVERHEAD_CAMERA: Vec3 = Vec3::new(0.0, -1750.0, 50.0);
pub const INITIAL_CAMERA: Vec3 = Vec3::new(0.0, 0.0, 25.0);
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 10_000.0;

// Particles
pub const EXPLOSION_COUNT: usize = 30;
pub const EXPLOSION_DECAY: f32 = 0.015;
pub const EXPLOSION_GRAVITY: f32 = 0.05;
pub const EXPLOSION_SPEED: f32 = 3.0;
pub const SPARKLE_COUNT: usize = 12;
pub const SPARKLE_DECAY: f32 = 0.02;
pub const SPARKLE_SPEED: f32 = 0.5;

// Stars
pub const STAR_FADE_START: f32 = 0.08;
pub const STAR_FADE_END: f32 = 0.12;
pub const STAR_FIELD_EXTENT: f32 = 3000.0;
pub const STAR_COUNT: usize = 8000;
pub const STAR_SPIN_PER_FRAME: Vec3 = Vec3::new(0.0001, 0.0003, 0.0);

// Fog
pub const FOG_DENSITY: f32 = 0.0008;

// Sun
pub const SUN_AZIMUTH_DEG: f32 = 180.0;

// Balloons
pub const BALLOON_COUNT: usize = 8;
pub const BALLOON_COLORS: [u32; BALLOON_COUNT] = [
    0xff1493, 0x00bfff, 0xffd700, 0xff4500, 0x00ff7f, 0xff69b4, 0x9370db, 0xff6347,
];
pub const TETHER_SEGMENTS: usize = 30;

/// Background and fog palette from the void of space down to a clear sky.
pub const SKY_PALETTE: [u32; 35] = [
    0x000000, // space
    0x020205, 0x040408, 0x06060c, 0x080810, // early thermosphere
    0x0a0a14, 0x0d0d18, 0x10101c, 0x131320, 0x161624, 0x191928, 0x1c1c2c, //
    0x1f1f30, // mesosphere
    0x232338, 0x272740, 0x2b2b48, 0x2f2f50, 0x333358, 0x373760, 0x3b3b68, 0x3f3f70, //
    0x434378, // stratosphere
    0x474780, 0x4b4b88, 0x4f4f90, 0x535398, 0x5757a0, 0x5b5ba8, //
    0x5f5fb0, // upper troposphere
    0x6565b8, 0x6b6bc0, 0x7171c8, 0x7777d0, 0x7d7dd8, //
    0x87ceeb, // meadow sky
];

/// Convert a packed `0xRRGGBB` colour into linear-ish `[r, g, b]` floats.
#[inline]
pub fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
