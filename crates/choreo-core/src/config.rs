use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Tuning constants for integration, projection and drawing.
///
/// Every value is per animation frame; the engine does not scale by wall-clock delta.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub spring: f32,
    pub damping: f32,
    /// Clock increment per frame.
    pub clock_step: f32,
    pub orbit_amplitude: f32,
    pub orbit_frequency: f32,
    /// First-order blend factor for scatter intensity.
    pub scatter_blend: f32,
    /// Scatter intensity at or below this is treated as off.
    pub scatter_epsilon: f32,
    pub scatter_reach: f32,
    pub scatter_cap: f32,
    pub scatter_gain: f32,
    pub scatter_depth_gain: f32,
    /// Opacity lost at full scatter.
    pub scatter_dimming: f32,
    pub focal_length: f32,
    pub yaw_speed: f32,
    pub pitch_amplitude: f32,
    pub pitch_frequency: f32,
    /// Full width of the per-axis entrance jitter.
    pub entrance_spread: f32,
    pub size_range: (f32, f32),
    pub opacity_range: (f32, f32),
    pub glow_ratio: f32,
    pub hue_wobble: f32,
    pub depth_lightness: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            spring: 0.045,
            damping: 0.88,
            clock_step: 0.005,
            orbit_amplitude: 1.2,
            orbit_frequency: 0.4,
            scatter_blend: 0.04,
            scatter_epsilon: 0.01,
            scatter_reach: 70.0,
            scatter_cap: 1.8,
            scatter_gain: 35.0,
            scatter_depth_gain: 20.0,
            scatter_dimming: 0.12,
            focal_length: 420.0,
            yaw_speed: 0.0025,
            pitch_amplitude: 0.04,
            pitch_frequency: 0.15,
            entrance_spread: 60.0,
            size_range: (1.8, 3.2),
            opacity_range: (0.75, 1.0),
            glow_ratio: 3.5,
            hue_wobble: 4.0,
            depth_lightness: 10.0,
        }
    }
}

/// Viewport widths below this are treated as mobile.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Structural viewport classification. Crossing it reinitializes the swarm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: f32) -> Self {
        if width < MOBILE_BREAKPOINT {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn profile(self) -> ViewportProfile {
        match self {
            ViewportClass::Mobile => ViewportProfile {
                class: self,
                particle_count: 200,
                base_radius: 85.0,
                canvas_size: 340,
            },
            ViewportClass::Desktop => ViewportProfile {
                class: self,
                particle_count: 350,
                base_radius: 125.0,
                canvas_size: 550,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ViewportClass::Mobile => "mobile",
            ViewportClass::Desktop => "desktop",
        }
    }
}

impl fmt::Display for ViewportClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewportClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobile" => Ok(ViewportClass::Mobile),
            "desktop" => Ok(ViewportClass::Desktop),
            other => Err(Error::UnknownViewportClass(other.to_string())),
        }
    }
}

/// Particle count and spatial scale for one viewport class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportProfile {
    pub class: ViewportClass,
    pub particle_count: usize,
    pub base_radius: f32,
    /// Edge length of the square drawing surface in pixels.
    pub canvas_size: u32,
}

impl Default for ViewportProfile {
    fn default() -> Self {
        ViewportClass::Desktop.profile()
    }
}
