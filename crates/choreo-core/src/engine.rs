use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::camera::Rotation;
use crate::config::{EngineConfig, ViewportClass, ViewportProfile};
use crate::forces::pointer::{ease_scatter, PointerState};
use crate::forces::spring::integrate;
use crate::particle::ParticleSet;
use crate::render::{compose, draw, FrameView, RenderSurface, Sprite};
use crate::shapes::{ShapeFn, ShapeRegistry, DEFAULT_SHAPE};

/// What happened to a frame handed to [`Simulation::render`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The frame was drawn with this many particles.
    Drawn(usize),
    /// The surface could not be drawn to; nothing changed.
    SurfaceUnavailable,
    /// There were no particles to draw.
    Empty,
}

/// The whole mutable state of the swarm.
///
/// One instance lives for as long as the visual engine is mounted. Host
/// signals reach it only through the setters below; integration and drawing
/// happen in [`step`](Self::step) and [`render`](Self::render).
pub struct Simulation {
    pub particles: ParticleSet,
    pub config: EngineConfig,
    pub rotation: Rotation,
    pointer: PointerState,
    scatter: f32,
    /// Seconds-like frame clock; f64 so the per-frame step never rounds away.
    clock: f64,
    profile: ViewportProfile,
    registry: ShapeRegistry,
    active_shape: String,
    rng: Box<dyn RngCore>,
    sprites: Vec<Sprite>,
}

impl Simulation {
    /// Swarm for `profile`, seeded from OS entropy, starting on the sphere.
    pub fn new(profile: ViewportProfile) -> Self {
        Self::with_rng(profile, Box::new(SmallRng::from_entropy()))
    }

    /// Reproducible swarm for tests and offline rendering.
    pub fn with_seed(profile: ViewportProfile, seed: u64) -> Self {
        Self::with_rng(profile, Box::new(SmallRng::seed_from_u64(seed)))
    }

    pub fn with_rng(profile: ViewportProfile, rng: Box<dyn RngCore>) -> Self {
        Self::with_parts(profile, EngineConfig::default(), ShapeRegistry::builtin(), rng)
    }

    pub fn with_parts(
        profile: ViewportProfile,
        config: EngineConfig,
        registry: ShapeRegistry,
        rng: Box<dyn RngCore>,
    ) -> Self {
        let mut sim = Self {
            particles: ParticleSet::new(0),
            config,
            rotation: Rotation::default(),
            pointer: PointerState::default(),
            scatter: 0.0,
            clock: 0.0,
            profile,
            registry,
            active_shape: String::new(),
            rng,
            sprites: Vec::new(),
        };
        sim.initialize(DEFAULT_SHAPE);
        sim
    }

    /// Recreate every particle on `shape`, scattered for an entrance.
    ///
    /// This discards in-flight morph state; it is only meant for start-up and
    /// viewport reclassification.
    pub fn initialize(&mut self, shape: &str) {
        let (name, generator) = self.resolve(shape);
        self.particles = ParticleSet::spawn(
            generator,
            self.profile.particle_count,
            self.profile.base_radius,
            &self.config,
            self.rng.as_mut(),
        );
        log::debug!(
            "initialized {} particles on {name} (radius {})",
            self.particles.count,
            self.profile.base_radius
        );
        self.active_shape = name;
    }

    /// Point every particle at `shape` without moving it.
    ///
    /// Returns `false` (and does nothing) when `shape` is already active.
    /// Unknown names retarget to the sphere.
    pub fn retarget(&mut self, shape: &str) -> bool {
        let (name, generator) = self.resolve(shape);
        if name == self.active_shape {
            return false;
        }
        self.particles.retarget(generator, self.profile.base_radius);
        log::debug!("retarget {} -> {name}", self.active_shape);
        self.active_shape = name;
        true
    }

    /// Switch viewport class. Crossing classes reinitializes onto the active shape.
    pub fn set_viewport_class(&mut self, class: ViewportClass) -> bool {
        if class == self.profile.class {
            return false;
        }
        log::debug!("viewport {} -> {class}, reinitializing", self.profile.class);
        self.profile = class.profile();
        let shape = std::mem::take(&mut self.active_shape);
        self.initialize(&shape);
        true
    }

    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer.position = position;
    }

    pub fn set_hover(&mut self, active: bool) {
        self.pointer.active = active;
    }

    /// Advance one frame: clock, rotation, scatter easing, spring integration.
    pub fn step(&mut self) {
        self.clock += self.config.clock_step as f64;
        self.rotation.advance(self.clock, &self.config);
        self.scatter = ease_scatter(self.scatter, self.pointer.active, self.config.scatter_blend);
        integrate(
            &mut self.particles.position,
            &mut self.particles.velocity,
            &self.particles.target,
            self.config.spring,
            self.config.damping,
        );
    }

    /// Draw the current state. Never fails: problems become skipped frames.
    pub fn render(&mut self, surface: &mut dyn RenderSurface) -> FrameOutcome {
        let size = match surface.begin_frame() {
            Ok(size) => size,
            Err(e) => {
                log::trace!("skipping frame: {e}");
                return FrameOutcome::SurfaceUnavailable;
            }
        };
        if self.particles.is_empty() || self.profile.base_radius <= 0.0 {
            return FrameOutcome::Empty;
        }

        let view = FrameView {
            config: &self.config,
            rotation: self.rotation,
            pointer: self.pointer,
            scatter: self.scatter,
            clock: self.clock,
            reach: self.profile.base_radius,
            center: size * 0.5,
        };
        compose(&self.particles, &view, &mut self.sprites);
        draw(&self.sprites, surface);
        FrameOutcome::Drawn(self.sprites.len())
    }

    /// Sprites of the last drawn frame, back to front.
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn active_shape(&self) -> &str {
        &self.active_shape
    }

    pub fn scatter(&self) -> f32 {
        self.scatter
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn profile(&self) -> ViewportProfile {
        self.profile
    }

    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    /// Register a custom silhouette. Takes effect on the next retarget.
    pub fn register_shape(&mut self, name: impl Into<String>, generator: ShapeFn) {
        self.registry.register(name, generator);
    }

    fn resolve(&self, shape: &str) -> (String, ShapeFn) {
        let (name, generator) = self.registry.resolve(shape);
        (name.to_string(), generator)
    }
}
