//! Silhouette generators.
//!
//! Each generator maps `(index, total, radius)` to a point on its silhouette.
//! The branch inside a generator is chosen by `t = index / total`; thresholds are
//! part of the silhouette and must not drift. All generators return the origin
//! for `total == 0`.

use std::f32::consts::PI;

use glam::Vec3;

use crate::math::{fract, local_t};

/// `π(1 + √5)`, the golden-angle increment used by every Fibonacci lattice here.
pub const GOLDEN_TURN: f32 = PI * 3.236_068;

fn fraction(index: usize, total: usize) -> Option<f32> {
    (total > 0).then(|| index as f32 / total as f32)
}

/// Point on a Fibonacci sphere of radius `r` for lattice fraction `u` and angular index `k`.
fn fibonacci_point(u: f32, k: f32, r: f32) -> Vec3 {
    let phi = (1.0 - 2.0 * u).clamp(-1.0, 1.0).acos();
    let theta = GOLDEN_TURN * k;
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.cos(),
        r * phi.sin() * theta.sin(),
    )
}

/// Full-range Fibonacci sphere at 85% of the nominal radius.
pub fn shape_sphere(index: usize, total: usize, radius: f32) -> Vec3 {
    let Some(t) = fraction(index, total) else {
        return Vec3::ZERO;
    };
    fibonacci_point(t, index as f32, radius * 0.85)
}

/// Light bulb: squashed spherical glass over a tapering helical screw base.
pub fn shape_bulb(index: usize, total: usize, radius: f32) -> Vec3 {
    let Some(t) = fraction(index, total) else {
        return Vec3::ZERO;
    };

    if t < 0.7 {
        let glass = radius * 0.72;
        let p = fibonacci_point(t / 0.7, index as f32, glass);
        Vec3::new(p.x, -radius * 0.15 + p.y * 0.75, p.z)
    } else {
        let u = local_t(t, 0.7, 0.3);
        let angle = u * PI * 14.0;
        let base = radius * 0.22 * (1.0 - u * 0.35);
        Vec3::new(
            base * angle.cos(),
            radius * 0.45 + u * radius * 0.38,
            base * angle.sin(),
        )
    }
}

/// Thick open arc with a small sphere accent.
pub fn shape_logo_mark(index: usize, total: usize, radius: f32) -> Vec3 {
    let Some(t) = fraction(index, total) else {
        return Vec3::ZERO;
    };

    if t < 0.85 {
        let u = t / 0.85;
        let start = PI * 0.3;
        let end = PI * 1.7;
        let angle = start + u * (end - start);

        // five radial layers give the stroke its thickness
        let layer = (index % 5) as f32 / 5.0;
        let ring = radius * 0.55 + (layer - 0.5) * radius * 0.28;

        Vec3::new(
            ring * angle.cos(),
            ring * angle.sin(),
            (layer - 0.5) * radius * 0.25,
        )
    } else {
        let u = local_t(t, 0.85, 0.15);
        let k = index as f32 - total as f32 * 0.85;
        let dot = fibonacci_point(u, k, radius * 0.15);
        dot + Vec3::new(radius * 0.42, -radius * 0.05, 0.0)
    }
}

/// Rocket: nose cone, body, porthole and three fins, in that order of `t`.
pub fn shape_rocket(index: usize, total: usize, radius: f32) -> Vec3 {
    let Some(t) = fraction(index, total) else {
        return Vec3::ZERO;
    };

    if t < 0.28 {
        let u = t / 0.28;
        let angle = u * PI * 10.0;
        let cone = u * radius * 0.24;
        Vec3::new(
            cone * angle.cos(),
            -radius * 0.85 + u * radius * 0.32,
            cone * angle.sin(),
        )
    } else if t < 0.62 {
        let u = local_t(t, 0.28, 0.34);
        let angle = u * PI * 12.0;
        let body = radius * 0.24;
        Vec3::new(
            body * angle.cos(),
            -radius * 0.53 + u * radius * 0.85,
            body * angle.sin(),
        )
    } else if t < 0.78 {
        let u = local_t(t, 0.62, 0.16);
        let angle = u * PI * 2.0;
        let window = radius * 0.09;
        Vec3::new(
            window * angle.cos(),
            -radius * 0.32 + window * angle.sin() * 0.5,
            radius * 0.25,
        )
    } else {
        let u = local_t(t, 0.78, 0.22);
        let fin = (u * 3.0).floor().min(2.0);
        let along = fract(u * 3.0);
        let base_angle = fin / 3.0 * PI * 2.0;
        let reach = radius * 0.24 + along * radius * 0.28;
        Vec3::new(
            reach * base_angle.cos(),
            radius * 0.08 + along * radius * 0.38,
            reach * base_angle.sin(),
        )
    }
}

/// Speech bubble: squircle body in five depth layers with a pointed tail.
pub fn shape_message_bubble(index: usize, total: usize, radius: f32) -> Vec3 {
    let Some(t) = fraction(index, total) else {
        return Vec3::ZERO;
    };

    if t < 0.85 {
        let angle = t / 0.85 * PI * 2.0;
        let squircle = angle.cos().abs().powf(0.3) + angle.sin().abs().powf(0.3);
        let rim = radius * 0.7 / squircle.powf(0.5);

        let layer = (index % 5) as f32 / 5.0;
        let layer_scale = 0.85 + layer * 0.3;

        Vec3::new(
            angle.cos() * rim * 1.15 * layer_scale,
            angle.sin() * rim * 0.85 * layer_scale - radius * 0.05,
            (layer - 0.5) * radius * 0.35,
        )
    } else {
        let u = local_t(t, 0.85, 0.15);
        let layer = (index % 4) as f32 / 4.0;

        let (start_x, start_y) = (-radius * 0.55, radius * 0.35);
        let (end_x, end_y) = (-radius * 0.75, radius * 0.7);
        // spread narrows to nothing at the tip
        let spread = (1.0 - u) * radius * 0.18;

        Vec3::new(
            start_x + (end_x - start_x) * u + (layer - 0.5) * spread,
            start_y + (end_y - start_y) * u,
            (layer - 0.5) * radius * 0.12,
        )
    }
}
