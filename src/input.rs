use glam::{Vec2, Vec3};

/// Nearest non-negative hit distance of a ray against a sphere.
/// `rd` is expected to be normalized.
#[inline]
pub fn ray_sphere(ro: Vec3, rd: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ro - center;
    let b = oc.dot(rd);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let s = disc.sqrt();
    let t0 = -b - s;
    let t1 = -b + s;
    if t0 >= 0.0 {
        Some(t0)
    } else if t1 >= 0.0 {
        Some(t1)
    } else {
        None
    }
}

/// Convert a client-space pointer position to normalized device coordinates
/// relative to the canvas rectangle (`left`, `top`, `width`, `height`).
#[inline]
pub fn client_to_ndc(client: Vec2, left: f32, top: f32, width: f32, height: f32) -> Option<Vec2> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let x = ((client.x - left) / width) * 2.0 - 1.0;
    let y = -((client.y - top) / height) * 2.0 + 1.0;
    Some(Vec2::new(x, y))
}

/// Pick the closest sphere along the ray. Returns the candidate's key and the
/// world hit point.
pub fn nearest_hit<K: Copy>(
    ro: Vec3,
    rd: Vec3,
    candidates: impl IntoIterator<Item = (K, Vec3, f32)>,
) -> Option<(K, Vec3)> {
    let mut best: Option<(K, f32)> = None;
    for (key, center, radius) in candidates {
        if let Some(t) = ray_sphere(ro, rd, center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((key, t)),
            }
        }
    }
    best.map(|(k, t)| (k, ro + rd * t))
}
