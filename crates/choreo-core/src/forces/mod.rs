//! Per-frame motion rules.
//!
//! `spring` is the only rule that feeds back into simulated state; `orbit`
//! and `pointer` produce render-time offsets that are discarded after drawing.

pub mod spring;
pub mod orbit;
pub mod pointer;
