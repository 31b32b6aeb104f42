//! Per-session state shared between input handlers and the frame routine.
//!
//! Nothing here touches platform APIs; front-ends translate their native
//! events into these values before handing them to a session.

use crate::error::{FieldError, Result};
use glam::DVec2;

/// Drawing surface bounds in pixels. Particles live in `[0, width) × [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A surface is usable when both sides are finite and strictly positive.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn ensure_usable(self) -> Result<Self> {
        if self.is_usable() {
            Ok(self)
        } else {
            Err(FieldError::UnusableSurface {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    pub fn contains(&self, p: DVec2) -> bool {
        (0.0..self.width).contains(&p.x) && (0.0..self.height).contains(&p.y)
    }
}

/// Last known pointer position in surface pixels.
///
/// Each session owns one; the frame routine takes a copy at the start of the
/// frame so every particle sees the same snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
}

impl PointerState {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn pos(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}
