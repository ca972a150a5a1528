//! Centripetal Catmull-Rom sampling for balloon tethers.

use glam::Vec3;

// Hermite coefficients for one non-uniform segment between x1 and x2.
fn segment(x0: Vec3, x1: Vec3, x2: Vec3, x3: Vec3, dt0: f32, dt1: f32, dt2: f32, w: f32) -> Vec3 {
    let mut t1 = (x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1;
    let mut t2 = (x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2;
    t1 *= dt1;
    t2 *= dt1;
    let c0 = x1;
    let c1 = t1;
    let c2 = -3.0 * x1 + 3.0 * x2 - 2.0 * t1 - t2;
    let c3 = 2.0 * x1 - 2.0 * x2 + t1 + t2;
    c0 + c1 * w + c2 * w * w + c3 * w * w * w
}

/// Point on an open centripetal Catmull-Rom curve through `points` at `t` in `[0, 1]`.
pub fn catmull_rom(points: &[Vec3], t: f32) -> Vec3 {
    match points.len() {
        0 => return Vec3::ZERO,
        1 => return points[0],
        _ => {}
    }
    let l = points.len();
    let p = (l - 1) as f32 * t.clamp(0.0, 1.0);
    let mut i = p.floor() as usize;
    let mut w = p - i as f32;
    if i >= l - 1 {
        i = l - 2;
        w = 1.0;
    }

    // open ends are extrapolated by mirroring the neighbour
    let p0 = if i > 0 { points[i - 1] } else { points[0] * 2.0 - points[1] };
    let p1 = points[i];
    let p2 = points[i + 1];
    let p3 = if i + 2 < l { points[i + 2] } else { points[l - 1] * 2.0 - points[l - 2] };

    let mut dt0 = p0.distance_squared(p1).powf(0.25);
    let mut dt1 = p1.distance_squared(p2).powf(0.25);
    let mut dt2 = p2.distance_squared(p3).powf(0.25);
    if dt1 < 1e-4 {
        dt1 = 1.0;
    }
    if dt0 < 1e-4 {
        dt0 = dt1;
    }
    if dt2 < 1e-4 {
        dt2 = dt1;
    }
    segment(p0, p1, p2, p3, dt0, dt1, dt2, w)
}

/// Sample `segments + 1` evenly spaced points along the curve into `out`.
pub fn sample_into(points: &[Vec3], segments: usize, out: &mut Vec<Vec3>) {
    out.clear();
    let n = segments.max(1);
    out.extend((0..=n).map(|k| catmull_rom(points, k as f32 / n as f32)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_control_points() {
        let pts = [
            Vec3::new(0.0, 4.0, 0.0),
            Vec3::new(1.0, 3.0, 0.5),
            Vec3::new(0.5, 2.0, 1.0),
            Vec3::new(0.2, 1.0, 0.3),
            Vec3::new(0.0, 0.5, 0.0),
        ];
        for (k, p) in pts.iter().enumerate() {
            let q = catmull_rom(&pts, k as f32 / 4.0);
            assert!(q.distance(*p) < 1e-4, "point {k}: {q:?} vs {p:?}");
        }
    }

    #[test]
    fn sample_count_includes_both_ends() {
        let pts = [Vec3::ZERO, Vec3::X, Vec3::new(2.0, 1.0, 0.0)];
        let mut out = Vec::new();
        sample_into(&pts, 30, &mut out);
        assert_eq!(out.len(), 31);
        assert!(out[0].distance(Vec3::ZERO) < 1e-5);
        assert!(out[30].distance(Vec3::new(2.0, 1.0, 0.0)) < 1e-5);
    }
}
