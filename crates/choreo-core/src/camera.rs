use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use crate::config::EngineConfig;

/// Camera-equivalent angles applied to the whole swarm.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    /// About the vertical axis, advances every frame, kept in `[0, 2π)`.
    pub yaw: f32,
    /// About the horizontal axis, a bounded sinusoid of the clock.
    pub pitch: f32,
}

impl Rotation {
    /// Advance yaw by one frame and resample pitch at `clock`.
    pub fn advance(&mut self, clock: f64, config: &EngineConfig) {
        self.yaw = (self.yaw + config.yaw_speed).rem_euclid(TAU);
        self.pitch = (clock * config.pitch_frequency as f64).sin() as f32 * config.pitch_amplitude;
    }

    /// Rotate by yaw, then by pitch.
    pub fn apply(&self, p: Vec3) -> Vec3 {
        let (sin_y, cos_y) = self.yaw.sin_cos();
        let x = p.x * cos_y - p.z * sin_y;
        let z = p.x * sin_y + p.z * cos_y;

        let (sin_x, cos_x) = self.pitch.sin_cos();
        let y = p.y * cos_x - z * sin_x;
        let z = p.y * sin_x + z * cos_x;

        Vec3::new(x, y, z)
    }
}

/// A rotated point mapped onto the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    /// Perspective scale `f / (f + z)`.
    pub scale: f32,
    /// Nearness in [0,1]; 1 is closest to the viewer.
    pub depth: f32,
}

/// Perspective divide around `center`. `reach` is the swarm's base radius and
/// sets the z range that maps onto the full depth interval.
pub fn project(rotated: Vec3, center: Vec2, focal_length: f32, reach: f32) -> Projected {
    // points at or behind the eye plane collapse instead of flipping
    let denom = (focal_length + rotated.z).max(1e-3);
    let scale = focal_length / denom;
    Projected {
        screen: center + Vec2::new(rotated.x, rotated.y) * scale,
        scale,
        depth: depth_factor(rotated.z, reach),
    }
}

/// `clamp((reach − z) / (2·reach), 0, 1)`; a degenerate reach puts everything mid-depth.
pub fn depth_factor(z: f32, reach: f32) -> f32 {
    if reach <= 0.0 {
        return 0.5;
    }
    ((reach - z) / (reach * 2.0)).clamp(0.0, 1.0)
}

/// Size scaled by depth: `size·(0.45 + 0.55·depth)`, within `[0, size]`.
pub fn depth_size(size: f32, depth: f32) -> f32 {
    size * (0.45 + depth.clamp(0.0, 1.0) * 0.55)
}

/// Opacity scaled by depth and dimmed by scatter, within `[0, base_opacity]`.
pub fn depth_opacity(base_opacity: f32, depth: f32, scatter: f32, dimming: f32) -> f32 {
    let dim = (1.0 - scatter.clamp(0.0, 1.0) * dimming).clamp(0.0, 1.0);
    (base_opacity * (0.45 + depth.clamp(0.0, 1.0) * 0.55) * dim).max(0.0)
}
