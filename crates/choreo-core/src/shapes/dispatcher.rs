//! Shape lookup by name.
//!
//! Built-in silhouettes form a closed enum; the registry maps names (built-in
//! or custom) to generator functions and falls back to the sphere for names it
//! does not know.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;

use crate::error::Error;
use crate::shapes::primitives::*;

/// Signature every silhouette generator satisfies: `(index, total, radius) -> target`.
pub type ShapeFn = fn(usize, usize, f32) -> Vec3;

/// Name of the silhouette used when nothing else applies.
pub const DEFAULT_SHAPE: &str = "sphere";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
    Bulb,
    LogoMark,
    Rocket,
    MessageBubble,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Sphere,
        ShapeKind::Bulb,
        ShapeKind::LogoMark,
        ShapeKind::Rocket,
        ShapeKind::MessageBubble,
    ];

    /// Canonical registry name.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Bulb => "bulb",
            ShapeKind::LogoMark => "logo-mark",
            ShapeKind::Rocket => "rocket",
            ShapeKind::MessageBubble => "message-bubble",
        }
    }

    pub fn generator(self) -> ShapeFn {
        match self {
            ShapeKind::Sphere => shape_sphere,
            ShapeKind::Bulb => shape_bulb,
            ShapeKind::LogoMark => shape_logo_mark,
            ShapeKind::Rocket => shape_rocket,
            ShapeKind::MessageBubble => shape_message_bubble,
        }
    }

    /// Target position for `index` out of `total` at the given radius.
    pub fn position(self, index: usize, total: usize, radius: f32) -> Vec3 {
        (self.generator())(index, total, radius)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sphere" => Ok(ShapeKind::Sphere),
            "bulb" => Ok(ShapeKind::Bulb),
            "logo-mark" | "logo" | "cLogo" => Ok(ShapeKind::LogoMark),
            "rocket" => Ok(ShapeKind::Rocket),
            "message-bubble" | "message" => Ok(ShapeKind::MessageBubble),
            other => Err(Error::UnknownShape(other.to_string())),
        }
    }
}

/// Generators keyed by name.
#[derive(Clone)]
pub struct ShapeRegistry {
    entries: Vec<(String, ShapeFn)>,
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ShapeRegistry {
    /// Registry holding the five built-in silhouettes.
    pub fn builtin() -> Self {
        let entries = ShapeKind::ALL
            .iter()
            .map(|kind| (kind.name().to_string(), kind.generator()))
            .collect();
        Self { entries }
    }

    /// Add or replace a generator under `name`.
    pub fn register(&mut self, name: impl Into<String>, generator: ShapeFn) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = generator,
            None => self.entries.push((name, generator)),
        }
    }

    /// Exact entry, or the entry a built-in alias points at.
    fn entry(&self, name: &str) -> Option<(&str, ShapeFn)> {
        self.exact(name).or_else(|| {
            let canonical = ShapeKind::from_str(name).ok()?.name();
            self.exact(canonical)
        })
    }

    fn exact(&self, name: &str) -> Option<(&str, ShapeFn)> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(n, f)| (n.as_str(), *f))
    }

    /// Exact or alias lookup. Aliases only exist for the built-ins and follow
    /// whatever generator is registered under the canonical name.
    pub fn get(&self, name: &str) -> Option<ShapeFn> {
        self.entry(name).map(|(_, f)| f)
    }

    /// Canonical name for `name`, or `None` when unknown.
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.entry(name).map(|(n, _)| n)
    }

    /// Lookup that never fails: unknown names resolve to the sphere.
    pub fn resolve(&self, name: &str) -> (&str, ShapeFn) {
        if let Some(found) = self.entry(name) {
            return found;
        }
        log::warn!("unknown shape {name:?}, falling back to {DEFAULT_SHAPE}");
        self.entry(DEFAULT_SHAPE)
            .unwrap_or((ShapeKind::Sphere.name(), shape_sphere))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
