//! Page-section signals mapped onto silhouettes and screen anchors.

use std::fmt;
use std::str::FromStr;

use crate::engine::Simulation;
use crate::error::Error;
use crate::shapes::ShapeKind;

/// Visible page section, as reported by the host's scroll tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Services,
    Why,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Services,
        SectionId::Why,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::Why => "why",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Shape and anchor side for this section.
    pub fn binding(self) -> SectionBinding {
        let (shape, anchor) = match self {
            SectionId::Home => (ShapeKind::Sphere, AnchorSide::Right),
            SectionId::Services => (ShapeKind::Bulb, AnchorSide::Left),
            SectionId::Why => (ShapeKind::LogoMark, AnchorSide::Right),
            SectionId::Projects => (ShapeKind::Rocket, AnchorSide::Left),
            SectionId::Contact => (ShapeKind::MessageBubble, AnchorSide::Right),
        };
        SectionBinding { shape, anchor }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnchorSide {
    Left,
    Right,
}

impl AnchorSide {
    /// Normalised horizontal anchor: 0 for left, 1 for right.
    pub fn coordinate(self) -> f32 {
        match self {
            AnchorSide::Left => 0.0,
            AnchorSide::Right => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionBinding {
    pub shape: ShapeKind,
    pub anchor: AnchorSide,
}

/// Damped spring carrying the surface between the left and right anchors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorSpring {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    position: f32,
    velocity: f32,
    target: f32,
}

impl AnchorSpring {
    /// Frame delta the loop steps the spring with.
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Gap between the surface and the viewport edge, as a fraction of width.
    pub const EDGE_MARGIN: f32 = 0.03;

    pub fn new(side: AnchorSide) -> Self {
        let x = side.coordinate();
        Self {
            stiffness: 45.0,
            damping: 22.0,
            mass: 1.1,
            position: x,
            velocity: 0.0,
            target: x,
        }
    }

    pub fn set_side(&mut self, side: AnchorSide) {
        self.target = side.coordinate();
    }

    /// Semi-implicit Euler step of `m·a = −k·(x − target) − c·v`.
    pub fn step(&mut self, dt: f32) {
        let accel = (-self.stiffness * (self.position - self.target) - self.damping * self.velocity) / self.mass;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
    }

    /// Current normalised position (0 = left, 1 = right).
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < 1e-3 && self.velocity.abs() < 1e-3
    }

    /// Left edge of the surface in viewport pixels.
    pub fn screen_offset(&self, viewport_width: f32, canvas_size: f32) -> f32 {
        let margin = viewport_width * Self::EDGE_MARGIN;
        let left = margin;
        let right = viewport_width - margin - canvas_size;
        left + (right - left) * self.position
    }
}

/// Turns section signals into retargets and anchor moves.
pub struct ShapeSelector {
    current: Option<SectionId>,
    anchor: AnchorSpring,
}

impl Default for ShapeSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeSelector {
    /// Starts unbound, anchored where the home section sits.
    pub fn new() -> Self {
        Self {
            current: None,
            anchor: AnchorSpring::new(SectionId::Home.binding().anchor),
        }
    }

    /// Apply a section signal. Repeats of the current section do nothing.
    ///
    /// Returns whether the section changed.
    pub fn apply(&mut self, section: SectionId, sim: &mut Simulation) -> bool {
        if self.current == Some(section) {
            return false;
        }
        let binding = section.binding();
        sim.retarget(binding.shape.name());
        self.anchor.set_side(binding.anchor);
        self.current = Some(section);
        log::debug!("section {section}: {} on the {:?}", binding.shape, binding.anchor);
        true
    }

    pub fn current(&self) -> Option<SectionId> {
        self.current
    }

    pub fn anchor(&self) -> &AnchorSpring {
        &self.anchor
    }

    pub fn anchor_mut(&mut self) -> &mut AnchorSpring {
        &mut self.anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_table() {
        let expect = [
            ("home", "sphere", AnchorSide::Right),
            ("services", "bulb", AnchorSide::Left),
            ("why", "logo-mark", AnchorSide::Right),
            ("projects", "rocket", AnchorSide::Left),
            ("contact", "message-bubble", AnchorSide::Right),
        ];
        for (section, shape, side) in expect {
            let id: SectionId = section.parse().expect("known section");
            let binding = id.binding();
            assert_eq!(binding.shape.name(), shape);
            assert_eq!(binding.anchor, side);
        }
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(
            "footer".parse::<SectionId>(),
            Err(Error::UnknownSection("footer".to_string()))
        );
    }

    #[test]
    fn test_anchor_spring_settles_without_runaway() {
        let mut spring = AnchorSpring::new(AnchorSide::Right);
        spring.set_side(AnchorSide::Left);
        for _ in 0..600 {
            spring.step(AnchorSpring::FRAME_DT);
            assert!(spring.position() > -0.2 && spring.position() < 1.2);
        }
        assert!(spring.is_settled(), "position {}", spring.position());
    }

    #[test]
    fn test_screen_offset_margins() {
        let left = AnchorSpring::new(AnchorSide::Left);
        let right = AnchorSpring::new(AnchorSide::Right);
        assert!((left.screen_offset(1000.0, 550.0) - 30.0).abs() < 1e-4);
        assert!((right.screen_offset(1000.0, 550.0) - 420.0).abs() < 1e-4);
    }
}
