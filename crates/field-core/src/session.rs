//! One mounted particle background: field, pointer and lifecycle in one place.
//!
//! The host drives a session from its frame scheduler by calling
//! [`AnimationSession::run`] once per display refresh and rescheduling only
//! while it returns [`Continuation::Next`]. Input handlers call
//! [`AnimationSession::pointer_moved`] and [`AnimationSession::resized`].
//! After [`AnimationSession::teardown`] every entry point is inert, so late
//! events from a host that has not yet detached its listeners are harmless.

use crate::error::Result;
use crate::field::ParticleField;
use crate::paint::Painter;
use crate::params::FieldParams;
use crate::state::{PointerState, Surface};

/// What the host scheduler should do after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Continuation {
    /// Schedule another frame.
    Next,
    /// The session is gone; stop scheduling.
    Halt,
}

pub struct AnimationSession {
    field: ParticleField,
    pointer: PointerState,
    frames: u64,
    last_links: usize,
    torn_down: bool,
}

impl AnimationSession {
    pub fn mount(surface: Surface, params: FieldParams) -> Result<Self> {
        let field = ParticleField::new(surface, params)?;
        log::debug!("[session] mounted {}x{}", surface.width, surface.height);
        Ok(Self::with_field(field))
    }

    pub fn with_field(field: ParticleField) -> Self {
        Self {
            field,
            pointer: PointerState::default(),
            frames: 0,
            last_links: 0,
            torn_down: false,
        }
    }

    /// Run one frame: step against the current pointer, then paint.
    pub fn run<P: Painter>(&mut self, painter: &mut P) -> Continuation {
        if self.torn_down {
            return Continuation::Halt;
        }
        let pointer = self.pointer;
        self.field.step(pointer);
        self.last_links = self.field.paint(painter);
        self.frames += 1;
        Continuation::Next
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        if self.torn_down || !x.is_finite() || !y.is_finite() {
            return;
        }
        self.pointer = PointerState::new(x, y);
    }

    /// Follow a surface size change. Unusable sizes (e.g. a collapsed
    /// viewport) keep the previous bounds.
    pub fn resized(&mut self, surface: Surface) {
        if self.torn_down {
            return;
        }
        if let Err(e) = self.field.resize(surface) {
            log::warn!("[session] ignoring resize: {}", e);
        }
    }

    /// Stop the session. Safe to call more than once.
    pub fn teardown(&mut self) {
        if !self.torn_down {
            self.torn_down = true;
            log::debug!("[session] torn down after {} frames", self.frames);
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Links drawn in the most recent frame.
    pub fn last_links(&self) -> usize {
        self.last_links
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}
