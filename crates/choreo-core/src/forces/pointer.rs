use glam::{Vec2, Vec3};

use crate::config::EngineConfig;
use crate::math::hash11;

/// Latest pointer sample, relative to the centre of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    /// Pointer is hovering the engine's surface.
    pub active: bool,
}

/// Ease `intensity` one frame toward 1 (hovering) or 0 (not hovering).
///
/// First-order low-pass: `s += (goal − s)·blend`.
#[inline]
pub fn ease_scatter(intensity: f32, hovering: bool, blend: f32) -> f32 {
    let goal = if hovering { 1.0 } else { 0.0 };
    (intensity + (goal - intensity) * blend).clamp(0.0, 1.0)
}

/// Render-time repulsion of a particle at `rendered` away from the pointer.
///
/// The magnitude falls off as `reach / distance`, capped at `cap`, and is
/// scaled by `intensity`. The z component is a frame-local wobble from a hash
/// of `(id, clock)`, so identical frames render identically. Returns zero at or
/// below the scatter epsilon.
pub fn scatter_offset(
    rendered: Vec3,
    pointer: Vec2,
    intensity: f32,
    id: u32,
    clock: f64,
    config: &EngineConfig,
) -> Vec3 {
    if intensity <= config.scatter_epsilon {
        return Vec3::ZERO;
    }

    let away = Vec2::new(rendered.x, rendered.y) - pointer;
    // +1 keeps a particle sitting on the pointer finite
    let dist = away.length() + 1.0;
    let force = (config.scatter_reach / dist).min(config.scatter_cap) * intensity;
    let push = away / dist * force * config.scatter_gain;

    // reduced in f64 so the seed keeps changing on a long-running clock
    let seed = (id as f64 * 12.9898 + clock * 7_823.3).rem_euclid(10_000.0);
    let wobble = hash11(seed as f32) - 0.5;
    Vec3::new(push.x, push.y, wobble * force * config.scatter_depth_gain)
}
