use std::f32::consts::TAU;

use glam::Vec3;
use rand::{Rng, RngCore};

use crate::color::PALETTE;
use crate::config::EngineConfig;
use crate::shapes::ShapeFn;

/// Snapshot of one particle, assembled from the SoA columns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub id: u32,
    pub position: Vec3,
    pub target: Vec3,
    pub velocity: Vec3,
    pub size: f32,
    pub base_opacity: f32,
    pub color_index: u8,
    pub orbit_phase: f32,
}

/// SoA particle storage
pub struct ParticleSet {
    pub count: usize,
    /// Creation index; phase-offsets visual noise
    pub id: Vec<u32>,
    pub position: Vec<Vec3>,
    pub velocity: Vec<Vec3>,
    /// Where the active shape wants the particle
    pub target: Vec<Vec3>,
    pub size: Vec<f32>,
    pub base_opacity: Vec<f32>,
    /// Index into [`PALETTE`]
    pub color_index: Vec<u8>,
    pub orbit_phase: Vec<f32>,
}

impl ParticleSet {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            id: (0..count as u32).collect(),
            position: vec![Vec3::ZERO; count],
            velocity: vec![Vec3::ZERO; count],
            target: vec![Vec3::ZERO; count],
            size: vec![0.0; count],
            base_opacity: vec![0.0; count],
            color_index: vec![0; count],
            orbit_phase: vec![0.0; count],
        }
    }

    /// Build `count` particles on `shape`, scattered around their targets.
    ///
    /// Each position is its target plus independent uniform jitter of
    /// `config.entrance_spread` total width per axis; velocities start at zero.
    /// Visual attributes are drawn here and never change afterwards.
    pub fn spawn(
        shape: ShapeFn,
        count: usize,
        radius: f32,
        config: &EngineConfig,
        rng: &mut dyn RngCore,
    ) -> Self {
        let mut set = Self::new(count);
        let spread = config.entrance_spread;
        let (size_lo, size_hi) = config.size_range;
        let (opacity_lo, opacity_hi) = config.opacity_range;

        for i in 0..count {
            let target = shape(i, count, radius);
            let jitter = Vec3::new(
                rng.gen::<f32>() - 0.5,
                rng.gen::<f32>() - 0.5,
                rng.gen::<f32>() - 0.5,
            ) * spread;

            set.target[i] = target;
            set.position[i] = target + jitter;
            set.size[i] = size_lo + rng.gen::<f32>() * (size_hi - size_lo);
            set.base_opacity[i] = opacity_lo + rng.gen::<f32>() * (opacity_hi - opacity_lo);
            set.color_index[i] =
                ((rng.gen::<f32>() * PALETTE.len() as f32) as usize).min(PALETTE.len() - 1) as u8;
            set.orbit_phase[i] = rng.gen::<f32>() * TAU;
        }

        set
    }

    /// Recompute every target in place. Positions and velocities are untouched.
    pub fn retarget(&mut self, shape: ShapeFn, radius: f32) {
        let total = self.count;
        for (i, target) in self.target.iter_mut().enumerate() {
            *target = shape(i, total, radius);
        }
    }

    pub fn get(&self, index: usize) -> Option<Particle> {
        (index < self.count).then(|| Particle {
            id: self.id[index],
            position: self.position[index],
            target: self.target[index],
            velocity: self.velocity[index],
            size: self.size[index],
            base_opacity: self.base_opacity[index],
            color_index: self.color_index[index],
            orbit_phase: self.orbit_phase[index],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Particle> + '_ {
        (0..self.count).filter_map(move |i| self.get(i))
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
