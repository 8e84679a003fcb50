//! Procedural silhouettes.
//!
//! Five built-in generators (sphere, bulb, logo mark, rocket, message bubble)
//! and a registry that selects among them by name.

pub mod primitives;
pub mod dispatcher;

pub use dispatcher::{ShapeFn, ShapeKind, ShapeRegistry, DEFAULT_SHAPE};
