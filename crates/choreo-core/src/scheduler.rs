//! Single-owner frame loop.
//!
//! Host event handlers only enqueue [`Signal`]s. Each [`FrameLoop::tick`]
//! applies the queued signals in arrival order, then integrates and draws
//! once. Nothing else touches the simulation, so no locking is needed.
//!
//! Every signal is a plain state write, so only the latest one of each kind
//! is kept: the queue never holds more than one entry per kind, however long
//! the loop stays stopped.

use std::collections::VecDeque;
use std::mem;

use glam::Vec2;

use crate::config::ViewportClass;
use crate::engine::{FrameOutcome, Simulation};
use crate::render::RenderSurface;
use crate::selector::{AnchorSpring, SectionId, ShapeSelector};

/// A state write requested by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Signal {
    /// Pointer position relative to the surface centre.
    PointerMove(Vec2),
    Hover(bool),
    /// New viewport width in CSS pixels.
    ViewportWidth(f32),
    Section(SectionId),
}

/// Result of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The loop is stopped; nothing ran.
    Stopped,
    /// No surface this frame; signals were applied, the simulation did not advance.
    Skipped,
    /// The simulation advanced; the frame drew or was empty.
    Advanced(FrameOutcome),
}

pub struct FrameLoop {
    sim: Simulation,
    selector: ShapeSelector,
    pending: VecDeque<Signal>,
    running: bool,
    frames: u64,
}

impl FrameLoop {
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim,
            selector: ShapeSelector::new(),
            pending: VecDeque::new(),
            running: true,
            frames: 0,
        }
    }

    /// Queue a signal for the next tick, replacing any pending one of the same kind.
    pub fn enqueue(&mut self, signal: Signal) {
        let kind = mem::discriminant(&signal);
        self.pending.retain(|queued| mem::discriminant(queued) != kind);
        self.pending.push_back(signal);
    }

    /// Run one frame. `surface` is `None` when the host has nothing to draw on.
    ///
    /// An unavailable or missing surface skips integration as well as drawing,
    /// so the swarm resumes exactly where it was once the surface returns.
    pub fn tick(&mut self, surface: Option<&mut dyn RenderSurface>) -> TickOutcome {
        if !self.running {
            return TickOutcome::Stopped;
        }
        self.apply_pending();
        self.selector.anchor_mut().step(AnchorSpring::FRAME_DT);

        let Some(surface) = surface else {
            log::trace!("no surface, skipping frame");
            return TickOutcome::Skipped;
        };

        // probe before integrating so a skipped frame leaves the clock alone
        if !surface.is_ready() {
            log::trace!("surface unavailable, skipping frame");
            return TickOutcome::Skipped;
        }

        self.sim.step();
        let outcome = self.sim.render(surface);
        self.frames += 1;
        TickOutcome::Advanced(outcome)
    }

    fn apply_pending(&mut self) {
        while let Some(signal) = self.pending.pop_front() {
            match signal {
                Signal::PointerMove(p) => self.sim.set_pointer(p),
                Signal::Hover(active) => self.sim.set_hover(active),
                Signal::ViewportWidth(width) => {
                    self.sim.set_viewport_class(ViewportClass::from_width(width));
                }
                Signal::Section(section) => {
                    self.selector.apply(section, &mut self.sim);
                }
            }
        }
    }

    /// Stop ticking. Safe to call repeatedly or before any frame ran.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("frame loop stopped after {} frames", self.frames);
        }
        self.running = false;
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames that advanced the simulation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn selector(&self) -> &ShapeSelector {
        &self.selector
    }

    /// Left edge of the surface in viewport pixels.
    pub fn anchor_offset(&self, viewport_width: f32) -> f32 {
        let canvas = self.sim.profile().canvas_size as f32;
        self.selector.anchor().screen_offset(viewport_width, canvas)
    }
}
