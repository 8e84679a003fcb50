//! Error types for the choreography engine.
//!
//! None of these reach the user: the frame loop turns them into skipped frames
//! or fallbacks. They exist so that parsing and surface access stay explicit.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The drawing surface cannot be drawn to this frame.
    #[error("render surface unavailable")]
    SurfaceUnavailable,

    #[error("unknown shape: {0}")]
    UnknownShape(String),

    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("unknown viewport class: {0}")]
    UnknownViewportClass(String),
}

pub type Result<T> = std::result::Result<T, Error>;
