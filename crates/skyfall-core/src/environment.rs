//! Progress to sky, fog and star-field parameters.
//!
//! Everything here is a pure function of progress so the render frame can
//! recompute the snapshot every tick without carrying state between frames.

use crate::constants::*;
use glam::Vec3;

/// Atmospheric sky dome parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyParams {
    pub visible: bool,
    pub opacity: f32,
    pub turbidity: f32,
    pub rayleigh: f32,
    pub sun_elevation_deg: f32,
    pub sun_azimuth_deg: f32,
}

impl SkyParams {
    pub fn sun_direction(&self) -> Vec3 {
        sun_direction(self.sun_elevation_deg, self.sun_azimuth_deg)
    }
}

/// Derived environment for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvironmentSnapshot {
    pub stars_visible: bool,
    /// Star-field fade factor in `[0, 1]`; 1 is fully visible.
    pub star_fade: f32,
    pub sky: SkyParams,
    pub fog_color: [f32; 3],
    pub fog_density: f32,
}

impl EnvironmentSnapshot {
    pub fn at(progress: f32) -> Self {
        let p = progress.clamp(0.0, 1.0);
        let star_fade = star_fade(p);
        Self {
            stars_visible: star_fade > 0.0,
            star_fade,
            sky: sky_params(p),
            fog_color: fog_color(p),
            fog_density: FOG_DENSITY,
        }
    }
}

/// Star visibility: full below 0.08, linear fade to zero at 0.12.
pub fn star_fade(progress: f32) -> f32 {
    if progress < STAR_FADE_START {
        1.0
    } else if progress < STAR_FADE_END {
        1.0 - (progress - STAR_FADE_START) / (STAR_FADE_END - STAR_FADE_START)
    } else {
        0.0
    }
}

// Sky band: [start, end) with the parameter range swept across it.
struct SkyBand {
    start: f32,
    end: f32,
    opacity: (f32, f32),
    turbidity: (f32, f32),
    rayleigh: (f32, f32),
    elevation: (f32, f32),
}

const SKY_HIDDEN_BELOW: f32 = 0.10;

const SKY_BANDS: [SkyBand; 5] = [
    // thermosphere: sky barely appears, sun almost overhead
    SkyBand {
        start: 0.10,
        end: 0.25,
        opacity: (0.0, 0.15),
        turbidity: (1.0, 2.0),
        rayleigh: (0.3, 0.8),
        elevation: (88.0, 88.0),
    },
    SkyBand {
        start: 0.25,
        end: 0.40,
        opacity: (0.15, 0.40),
        turbidity: (2.0, 5.0),
        rayleigh: (0.8, 1.5),
        elevation: (85.0, 77.0),
    },
    SkyBand {
        start: 0.40,
        end: 0.55,
        opacity: (0.40, 0.75),
        turbidity: (5.0, 8.0),
        rayleigh: (1.5, 2.0),
        elevation: (77.0, 67.0),
    },
    SkyBand {
        start: 0.55,
        end: 0.75,
        opacity: (0.75, 1.0),
        turbidity: (8.0, 10.0),
        rayleigh: (2.0, 2.5),
        elevation: (67.0, 55.0),
    },
    // lower troposphere down to the ground: fully opaque, sun sinking
    SkyBand {
        start: 0.75,
        end: 1.0,
        opacity: (1.0, 1.0),
        turbidity: (10.0, 12.0),
        rayleigh: (2.5, 3.0),
        elevation: (55.0, 45.0),
    },
];

#[inline]
fn lerp(range: (f32, f32), t: f32) -> f32 {
    range.0 + (range.1 - range.0) * t
}

pub fn sky_params(progress: f32) -> SkyParams {
    if progress < SKY_HIDDEN_BELOW {
        let first = &SKY_BANDS[0];
        return SkyParams {
            visible: false,
            opacity: 0.0,
            turbidity: first.turbidity.0,
            rayleigh: first.rayleigh.0,
            sun_elevation_deg: first.elevation.0,
            sun_azimuth_deg: SUN_AZIMUTH_DEG,
        };
    }
    let last = SKY_BANDS.len() - 1;
    let band = SKY_BANDS
        .iter()
        .position(|b| progress < b.end)
        .map(|i| &SKY_BANDS[i])
        .unwrap_or(&SKY_BANDS[last]);
    let t = ((progress - band.start) / (band.end - band.start)).clamp(0.0, 1.0);
    let opacity = lerp(band.opacity, t);
    SkyParams {
        visible: true,
        opacity,
        turbidity: lerp(band.turbidity, t),
        rayleigh: lerp(band.rayleigh, t),
        sun_elevation_deg: lerp(band.elevation, t),
        sun_azimuth_deg: SUN_AZIMUTH_DEG,
    }
}

/// Interpolated background/fog colour across [`SKY_PALETTE`].
pub fn fog_color(progress: f32) -> [f32; 3] {
    let steps = (SKY_PALETTE.len() - 1) as f32;
    let scaled = progress.clamp(0.0, 1.0) * steps;
    let index = (scaled.floor() as usize).min(SKY_PALETTE.len() - 2);
    let blend = scaled.fract();
    let a = rgb(SKY_PALETTE[index]);
    let b = rgb(SKY_PALETTE[index + 1]);
    [
        a[0] + (b[0] - a[0]) * blend,
        a[1] + (b[1] - a[1]) * blend,
        a[2] + (b[2] - a[2]) * blend,
    ]
}

/// Unit vector toward the sun; elevation is measured up from the horizon.
pub fn sun_direction(elevation_deg: f32, azimuth_deg: f32) -> Vec3 {
    let phi = (90.0 - elevation_deg).to_radians();
    let theta = azimuth_deg.to_radians();
    Vec3::new(phi.sin() * theta.sin(), phi.cos(), phi.sin() * theta.cos())
}
