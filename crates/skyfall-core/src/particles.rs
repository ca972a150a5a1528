//! Short-lived particles: the landing explosion and click sparkles.

use crate::constants::*;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Explosion,
    Sparkle,
}

impl ParticleKind {
    fn decay(self) -> f32 {
        match self {
            ParticleKind::Explosion => EXPLOSION_DECAY,
            ParticleKind::Sparkle => SPARKLE_DECAY,
        }
    }

    fn gravity(self) -> f32 {
        match self {
            ParticleKind::Explosion => EXPLOSION_GRAVITY,
            ParticleKind::Sparkle => 0.0,
        }
    }

    fn size_scale(self) -> f32 {
        match self {
            ParticleKind::Explosion => 2.0,
            ParticleKind::Sparkle => 1.0,
        }
    }

    fn radius(self) -> f32 {
        match self {
            ParticleKind::Explosion => 0.3,
            ParticleKind::Sparkle => 0.1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub kind: ParticleKind,
    pub position: Vec3,
    pub velocity: Vec3,
    pub life: f32,
    pub color: [f32; 3],
}

impl Particle {
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }

    /// World radius after life-based shrinking.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.kind.radius() * self.kind.size_scale() * self.life.max(0.0)
    }
}

/// Owns every live particle; nothing else holds references into it.
#[derive(Clone, Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn count(&self, kind: ParticleKind) -> usize {
        self.particles.iter().filter(|p| p.kind == kind).count()
    }

    pub fn spawn_explosion(&mut self, at: Vec3, rng: &mut impl Rng) {
        self.particles.reserve(EXPLOSION_COUNT);
        for _ in 0..EXPLOSION_COUNT {
            let velocity = Vec3::new(
                (rng.gen::<f32>() - 0.5) * EXPLOSION_SPEED,
                rng.gen::<f32>() * EXPLOSION_SPEED,
                (rng.gen::<f32>() - 0.5) * EXPLOSION_SPEED,
            );
            // warm hues: red through yellow-green
            let color = hsl_to_rgb(rng.gen::<f32>() * 0.3, 1.0, 0.6);
            self.particles.push(Particle {
                kind: ParticleKind::Explosion,
                position: at,
                velocity,
                life: 1.0,
                color,
            });
        }
    }

    pub fn spawn_sparkles(&mut self, at: Vec3, count: usize, rng: &mut impl Rng) {
        for _ in 0..count {
            let velocity = Vec3::new(
                (rng.gen::<f32>() - 0.5) * SPARKLE_SPEED,
                (rng.gen::<f32>() - 0.5) * SPARKLE_SPEED,
                (rng.gen::<f32>() - 0.5) * SPARKLE_SPEED,
            );
            let color = hsl_to_rgb(rng.gen::<f32>(), 1.0, 0.7);
            self.particles.push(Particle {
                kind: ParticleKind::Sparkle,
                position: at,
                velocity,
                life: 1.0,
                color,
            });
        }
    }

    /// Integrate one step and drop spent particles. Returns how many were removed.
    pub fn step(&mut self) -> usize {
        for p in &mut self.particles {
            p.position += p.velocity;
            p.velocity.y -= p.kind.gravity();
            p.life -= p.kind.decay();
        }
        let before = self.particles.len();
        self.particles.retain(|p| p.life > 0.0);
        before - self.particles.len()
    }
}

/// HSL to RGB with all components in `[0, 1]`.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s <= 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let hue = |mut t: f32| {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };
    [hue(h + 1.0 / 3.0), hue(h), hue(h - 1.0 / 3.0)]
}
