//! Particle choreography engine.
//!
//! A few hundred glowing particles spring toward procedurally generated
//! silhouettes, orbit slightly, scatter away from the pointer and are drawn
//! with a depth-aware glow. The host feeds pointer, hover, viewport and
//! page-section signals into a [`FrameLoop`] and calls `tick` once per
//! animation frame.

pub mod camera;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod forces;
pub mod math;
pub mod particle;
pub mod render;
pub mod scheduler;
pub mod selector;
pub mod shapes;

pub use config::{EngineConfig, ViewportClass, ViewportProfile};
pub use engine::{FrameOutcome, Simulation};
pub use error::{Error, Result};
pub use render::raster::Framebuffer;
pub use render::RenderSurface;
pub use scheduler::{FrameLoop, Signal, TickOutcome};
pub use selector::{AnchorSide, SectionId};
pub use shapes::{ShapeKind, ShapeRegistry};
