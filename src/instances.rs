use crate::constants::*;
use glam::{EulerRot, Quat, Vec3};
use skyfall_core::{Journey, SceneTag, ACTOR_SCALE};

/// Shaded sphere impostor.
pub const SHAPE_SPHERE: f32 = 0.0;
/// Soft glowing point (stars, particles).
pub const SHAPE_GLOW: f32 = 1.0;

/// One camera-facing impostor. Layout matches `Instance` in scene.wgsl.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    pub pos_radius: [f32; 4],
    pub color: [f32; 4],
    /// x: shape, y: 1.0 when unlit and unfogged
    pub params: [f32; 4],
}

impl SphereInstance {
    #[inline]
    pub fn sphere(center: Vec3, radius: f32, color: [f32; 3], opacity: f32, emissive: bool) -> Self {
        Self {
            pos_radius: [center.x, center.y, center.z, radius],
            color: [color[0], color[1], color[2], opacity],
            params: [SHAPE_SPHERE, if emissive { 1.0 } else { 0.0 }, 0.0, 0.0],
        }
    }

    #[inline]
    pub fn glow(center: Vec3, radius: f32, color: [f32; 3], opacity: f32) -> Self {
        Self {
            pos_radius: [center.x, center.y, center.z, radius],
            color: [color[0], color[1], color[2], opacity],
            params: [SHAPE_GLOW, 1.0, 0.0, 0.0],
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.pos_radius[0], self.pos_radius[1], self.pos_radius[2])
    }
}

const ACTOR_COLOR: [f32; 3] = [1.0, 0.71, 0.76];
const KNOT_COLOR: [f32; 3] = [0.2, 0.2, 0.2];
const TETHER_COLOR: [f32; 3] = [0.4, 0.4, 0.4];

/// Flatten the journey into draw instances, farthest first so alpha
/// blending composes correctly.
pub fn collect_instances(journey: &Journey, out: &mut Vec<SphereInstance>) {
    out.clear();
    push_stars(journey, out);
    push_props(journey, out);
    push_actor(journey, out);
    for p in journey.particles().iter() {
        out.push(SphereInstance::glow(p.position, p.radius(), p.color, p.opacity()));
    }

    let eye = journey.camera().camera.eye;
    out.sort_by(|a, b| {
        let da = a.center().distance_squared(eye);
        let db = b.center().distance_squared(eye);
        db.total_cmp(&da)
    });
}

fn push_stars(journey: &Journey, out: &mut Vec<SphereInstance>) {
    let env = journey.environment();
    if !env.stars_visible || env.star_fade <= 0.0 {
        return;
    }
    let field = journey.stars();
    let r = field.rotation;
    let spin = Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z);
    let fade = env.star_fade * STAR_BASE_OPACITY;
    for s in &field.stars {
        let pos = spin * Vec3::from_array(s.position);
        let [cr, cg, cb, ca] = s.color;
        out.push(SphereInstance::glow(
            pos,
            s.size * STAR_SIZE_SCALE,
            [cr, cg, cb],
            ca * fade,
        ));
    }
}

fn push_props(journey: &Journey, out: &mut Vec<SphereInstance>) {
    for (_, o) in journey.scene().iter() {
        if !o.visible {
            continue;
        }
        let radius = o.world_radius();
        match o.tag {
            SceneTag::Bird { .. } => {
                out.push(SphereInstance::sphere(o.position, radius, o.color, o.opacity, false));
                let wing = radius * 0.6;
                let reach = radius * BIRD_WING_OFFSET;
                let lift = o.flap * reach;
                for side in [-1.0_f32, 1.0] {
                    let at = o.position + Vec3::new(side * reach, lift, 0.0);
                    out.push(SphereInstance::sphere(at, wing, o.color, o.opacity, false));
                }
            }
            _ => out.push(SphereInstance::sphere(
                o.position,
                radius,
                o.color,
                o.opacity,
                o.emissive,
            )),
        }
    }
}

fn push_actor(journey: &Journey, out: &mut Vec<SphereInstance>) {
    let actor = journey.actor();
    if !actor.visible {
        return;
    }
    let r = actor.rotation;
    let orient = Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z);
    let to_world = |local: Vec3| actor.position + orient * (local * ACTOR_SCALE);

    out.push(SphereInstance::sphere(
        actor.position,
        ACTOR_BODY_RADIUS * ACTOR_SCALE,
        ACTOR_COLOR,
        1.0,
        false,
    ));
    for b in &actor.balloons.balloons {
        out.push(SphereInstance::sphere(
            to_world(b.position),
            BALLOON_RADIUS * ACTOR_SCALE,
            b.color,
            0.9,
            false,
        ));
        out.push(SphereInstance::sphere(
            to_world(b.knot),
            KNOT_RADIUS * ACTOR_SCALE,
            KNOT_COLOR,
            1.0,
            false,
        ));
        for p in &b.tether {
            out.push(SphereInstance::sphere(
                to_world(*p),
                TETHER_BEAD_RADIUS * ACTOR_SCALE,
                TETHER_COLOR,
                1.0,
                false,
            ));
        }
    }
}
