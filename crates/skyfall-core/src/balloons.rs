//! Balloons tied to the actor. Coordinates are in the actor's local frame.

use crate::constants::*;
use crate::curve;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

const KNOT_DROP: f32 = 0.6;
const TETHER_ANCHOR: Vec3 = Vec3::new(0.0, 0.5, 0.0);

#[derive(Clone, Debug)]
pub struct Balloon {
    pub index: usize,
    pub color: [f32; 3],
    pub position: Vec3,
    pub knot: Vec3,
    /// Sampled tether polyline from the knot down to the harness.
    pub tether: Vec<Vec3>,
}

impl Balloon {
    fn base_height(&self) -> f32 {
        4.0 + (self.index % BALLOON_COUNT) as f32 * 0.2
    }

    /// Five control points derived from the balloon's current position.
    pub fn tether_controls(&self) -> [Vec3; 5] {
        let b = self.position;
        let i = self.index as f32;
        [
            Vec3::new(b.x, b.y - KNOT_DROP, b.z),
            Vec3::new(
                b.x * 0.8 + i.sin() * 0.3,
                b.y - 1.5,
                b.z * 0.8 + i.cos() * 0.3,
            ),
            Vec3::new(
                b.x * 0.5 + (i * 2.0).sin() * 0.5,
                b.y - 2.5,
                b.z * 0.5 + (i * 2.0).cos() * 0.5,
            ),
            Vec3::new((i * 3.0).sin() * 0.3, b.y - 3.5, (i * 3.0).cos() * 0.3),
            TETHER_ANCHOR,
        ]
    }
}

#[derive(Clone, Debug, Default)]
pub struct BalloonRig {
    pub balloons: Vec<Balloon>,
}

impl BalloonRig {
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let balloons = (0..count)
            .map(|i| {
                let angle = i as f32 / count.max(1) as f32 * TAU;
                let radius = 2.0 + rng.gen::<f32>() * 0.5;
                let position = Vec3::new(
                    angle.cos() * radius,
                    4.0 + rng.gen::<f32>(),
                    angle.sin() * radius,
                );
                let mut b = Balloon {
                    index: i,
                    color: rgb(BALLOON_COLORS[i % BALLOON_COLORS.len()]),
                    position,
                    knot: position - Vec3::Y * KNOT_DROP,
                    tether: Vec::with_capacity(TETHER_SEGMENTS + 1),
                };
                curve::sample_into(&b.tether_controls(), TETHER_SEGMENTS, &mut b.tether);
                b
            })
            .collect();
        Self { balloons }
    }

    /// Bob every balloon and rebuild its tether for this frame.
    pub fn update(&mut self, time: f32) {
        for b in &mut self.balloons {
            let phase = (b.index * 3) as f32;
            b.position.y = b.base_height() + (time * 3.0 + phase).sin() * 0.5;
            b.knot = b.position - Vec3::Y * KNOT_DROP;
            let controls = b.tether_controls();
            curve::sample_into(&controls, TETHER_SEGMENTS, &mut b.tether);
        }
    }
}
