//! Background star field: a procedural cloud of points plus an optional
//! catalogue loaded at startup.

use crate::constants::*;
use crate::error::AssetError;
use crate::particles::hsl_to_rgb;
use glam::Vec3;
use rand::Rng;

/// One star as stored in the catalogue file and uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarRecord {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

pub const STAR_RECORD_BYTES: usize = std::mem::size_of::<StarRecord>();

/// Decode a packed little-endian catalogue of [`StarRecord`]s.
pub fn decode_catalog(bytes: &[u8]) -> Result<Vec<StarRecord>, AssetError> {
    if bytes.is_empty() {
        return Err(AssetError::Empty);
    }
    if bytes.len() % STAR_RECORD_BYTES != 0 {
        return Err(AssetError::Truncated {
            len: bytes.len(),
            record: STAR_RECORD_BYTES,
        });
    }
    Ok(bytes
        .chunks_exact(STAR_RECORD_BYTES)
        .map(bytemuck::pod_read_unaligned::<StarRecord>)
        .collect())
}

/// Random field of `count` stars inside a cube around the origin.
pub fn procedural_stars(count: usize, rng: &mut impl Rng) -> Vec<StarRecord> {
    (0..count)
        .map(|_| {
            let position = [
                (rng.gen::<f32>() - 0.5) * STAR_FIELD_EXTENT,
                (rng.gen::<f32>() - 0.5) * STAR_FIELD_EXTENT,
                (rng.gen::<f32>() - 0.5) * STAR_FIELD_EXTENT,
            ];
            let [r, g, b] = hsl_to_rgb(rng.gen::<f32>() * 0.3 + 0.5, 0.8, 0.8);
            StarRecord {
                position,
                size: rng.gen::<f32>() * 3.0 + 1.0,
                color: [r, g, b, 1.0],
            }
        })
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct StarField {
    pub stars: Vec<StarRecord>,
    /// Accumulated Euler spin in radians.
    pub rotation: Vec3,
}

impl StarField {
    pub fn new(stars: Vec<StarRecord>) -> Self {
        Self {
            stars,
            rotation: Vec3::ZERO,
        }
    }

    pub fn extend(&mut self, more: Vec<StarRecord>) {
        self.stars.extend(more);
    }

    pub fn spin(&mut self) {
        self.rotation += STAR_SPIN_PER_FRAME;
    }
}
