//! Projection and compositing of the swarm.
//!
//! Each frame the particles are rotated, projected and depth-sorted back to
//! front, then drawn as two passes per particle: a soft radial glow and a core
//! disc. Drawing goes through [`RenderSurface`], so the same pass can target
//! the software [`Framebuffer`](raster::Framebuffer) or a host canvas.

pub mod raster;

use std::cmp::Ordering;

use glam::{Vec2, Vec3};

use crate::camera::{depth_opacity, depth_size, project, Rotation};
use crate::color::{shade, Hsla};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::forces::orbit::orbit_offset;
use crate::forces::pointer::{scatter_offset, PointerState};
use crate::particle::ParticleSet;

/// One colour stop of a radial gradient, `offset` in [0,1] from the centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Hsla,
}

/// Something the renderer can draw onto.
pub trait RenderSurface {
    /// Cheap check whether a frame could be drawn right now.
    fn is_ready(&self) -> bool {
        true
    }

    /// Prepare a new frame and report the drawable size in pixels.
    ///
    /// Returns [`Error::SurfaceUnavailable`](crate::error::Error::SurfaceUnavailable)
    /// when nothing can be drawn this frame; the caller skips the frame.
    fn begin_frame(&mut self) -> Result<Vec2>;

    /// Fill a disc with a radial gradient through `stops`.
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]);

    /// Fill a disc with a flat colour.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla);
}

/// Everything needed to draw one particle, computed before any drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub index: usize,
    pub screen: Vec2,
    /// Post-rotation z, larger is farther away.
    pub z: f32,
    pub depth: f32,
    pub size: f32,
    pub glow_radius: f32,
    pub opacity: f32,
    pub color: Hsla,
}

impl Sprite {
    /// Glow pass stops: bright centre, dimmer shoulder at 35%, transparent edge.
    pub fn glow_stops(&self) -> [GradientStop; 3] {
        let c = self.color;
        [
            GradientStop {
                offset: 0.0,
                color: Hsla::new(c.h, c.s, c.l + 12.0, self.opacity),
            },
            GradientStop {
                offset: 0.35,
                color: Hsla::new(c.h, c.s, c.l, self.opacity * 0.45),
            },
            GradientStop {
                offset: 1.0,
                color: Hsla::new(c.h, c.s, c.l, 0.0),
            },
        ]
    }

    pub fn core_color(&self) -> Hsla {
        Hsla::new(self.color.h, 100.0, 90.0, self.opacity)
    }
}

/// Per-frame inputs to [`compose`] that are not part of the particle store.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub config: &'a EngineConfig,
    pub rotation: Rotation,
    pub pointer: PointerState,
    pub scatter: f32,
    pub clock: f64,
    /// Base radius of the swarm; sets the depth range.
    pub reach: f32,
    pub center: Vec2,
}

/// Build sprites for every particle, sorted back to front.
pub fn compose(particles: &ParticleSet, view: &FrameView<'_>, out: &mut Vec<Sprite>) {
    let config = view.config;
    out.clear();
    out.reserve(particles.count);

    for i in 0..particles.count {
        let id = particles.id[i];
        let orbit = orbit_offset(
            view.clock,
            particles.orbit_phase[i],
            config.orbit_frequency,
            config.orbit_amplitude,
        );
        let rendered = particles.position[i] + orbit;
        let scatter = scatter_offset(
            rendered,
            view.pointer.position,
            view.scatter,
            id,
            view.clock,
            config,
        );

        let rotated: Vec3 = view.rotation.apply(rendered + scatter);
        let projected = project(rotated, view.center, config.focal_length, view.reach);

        let size = depth_size(particles.size[i], projected.depth);
        let opacity = depth_opacity(
            particles.base_opacity[i],
            projected.depth,
            view.scatter,
            config.scatter_dimming,
        );
        let color = shade(
            particles.color_index[i],
            id,
            view.clock,
            projected.depth,
            config.hue_wobble,
            config.depth_lightness,
        );

        out.push(Sprite {
            index: i,
            screen: projected.screen,
            z: rotated.z,
            depth: projected.depth,
            size,
            glow_radius: (size * config.glow_ratio).max(1.0),
            opacity,
            color,
        });
    }

    // painter's algorithm: farthest first
    out.sort_by(|a, b| b.z.partial_cmp(&a.z).unwrap_or(Ordering::Equal));
}

/// Draw sorted sprites, glow before core for each particle.
pub fn draw(sprites: &[Sprite], surface: &mut dyn RenderSurface) {
    for sprite in sprites {
        let stops = sprite.glow_stops();
        surface.fill_radial_gradient(sprite.screen, sprite.glow_radius, &stops);
        surface.fill_circle(sprite.screen, sprite.size, sprite.core_color());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(&'static str, Vec2)>,
    }

    impl RenderSurface for Recorder {
        fn begin_frame(&mut self) -> Result<Vec2> {
            Ok(Vec2::splat(100.0))
        }

        fn fill_radial_gradient(&mut self, center: Vec2, _radius: f32, _stops: &[GradientStop]) {
            self.calls.push(("glow", center));
        }

        fn fill_circle(&mut self, center: Vec2, _radius: f32, _color: Hsla) {
            self.calls.push(("core", center));
        }
    }

    fn view(config: &EngineConfig) -> FrameView<'_> {
        FrameView {
            config,
            rotation: Rotation::default(),
            pointer: PointerState::default(),
            scatter: 0.0,
            clock: 0.0,
            reach: 100.0,
            center: Vec2::splat(50.0),
        }
    }

    #[test]
    fn test_compose_sorts_far_to_near() {
        let config = EngineConfig::default();
        let mut set = ParticleSet::new(3);
        set.position[0] = Vec3::new(0.0, 0.0, -80.0);
        set.position[1] = Vec3::new(0.0, 0.0, 90.0);
        set.position[2] = Vec3::new(0.0, 0.0, 5.0);
        set.size.fill(2.0);
        set.base_opacity.fill(1.0);

        let mut sprites = Vec::new();
        compose(&set, &view(&config), &mut sprites);

        let order: Vec<usize> = sprites.iter().map(|s| s.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
        assert!(sprites[0].depth < sprites[2].depth);
        assert!(sprites[0].size < sprites[2].size);
    }

    #[test]
    fn test_draw_glow_then_core() {
        let config = EngineConfig::default();
        let mut set = ParticleSet::new(2);
        set.size.fill(2.0);
        set.base_opacity.fill(1.0);
        let mut sprites = Vec::new();
        compose(&set, &view(&config), &mut sprites);

        let mut surface = Recorder::default();
        draw(&sprites, &mut surface);
        let kinds: Vec<&str> = surface.calls.iter().map(|c| c.0).collect();
        assert_eq!(kinds, vec!["glow", "core", "glow", "core"]);
    }

    #[test]
    fn test_glow_radius_ratio_and_floor() {
        let config = EngineConfig::default();
        let mut set = ParticleSet::new(2);
        set.size[0] = 2.0;
        set.size[1] = 0.0;
        set.base_opacity.fill(1.0);
        let mut sprites = Vec::new();
        compose(&set, &view(&config), &mut sprites);
        for s in &sprites {
            if s.size > 0.0 {
                assert!((s.glow_radius - s.size * 3.5).abs() < 1e-5);
            } else {
                assert_eq!(s.glow_radius, 1.0);
            }
        }
    }

    #[test]
    fn test_glow_stops_fade_out() {
        let sprite = Sprite {
            index: 0,
            screen: Vec2::ZERO,
            z: 0.0,
            depth: 0.5,
            size: 2.0,
            glow_radius: 7.0,
            opacity: 0.8,
            color: Hsla::new(346.0, 84.0, 55.0, 1.0),
        };
        let stops = sprite.glow_stops();
        assert_eq!(stops[0].color.l, 67.0);
        assert!((stops[1].color.a - 0.36).abs() < 1e-6);
        assert_eq!(stops[2].color.a, 0.0);
        assert_eq!(sprite.core_color().s, 100.0);
    }
}
