//! Drawing seam between the simulation and a concrete back-end.
//!
//! The web front-end implements [`Painter`] on top of a 2D canvas context;
//! the headless runner and tests use [`PaintStats`] and [`RecordingPainter`].

use crate::particle::Rgb;
use crate::state::Surface;
use glam::DVec2;

pub trait Painter {
    /// Wipe the whole surface.
    fn clear(&mut self, surface: Surface);

    /// Filled circle with a soft glow of the same colour.
    fn glow_disc(&mut self, center: DVec2, radius: f64, color: Rgb, alpha: f64, blur: f64);

    /// Straight line whose colour blends from `from_color` to `to_color`.
    fn gradient_line(
        &mut self,
        from: DVec2,
        to: DVec2,
        from_color: Rgb,
        to_color: Rgb,
        alpha: f64,
        width: f64,
    );
}

/// Counts draw calls without drawing anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaintStats {
    pub clears: usize,
    pub discs: usize,
    pub lines: usize,
}

impl Painter for PaintStats {
    fn clear(&mut self, _surface: Surface) {
        self.clears += 1;
    }

    fn glow_disc(&mut self, _center: DVec2, _radius: f64, _color: Rgb, _alpha: f64, _blur: f64) {
        self.discs += 1;
    }

    fn gradient_line(
        &mut self,
        _from: DVec2,
        _to: DVec2,
        _from_color: Rgb,
        _to_color: Rgb,
        _alpha: f64,
        _width: f64,
    ) {
        self.lines += 1;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    Clear(Surface),
    Disc {
        center: DVec2,
        radius: f64,
        color: Rgb,
        alpha: f64,
        blur: f64,
    },
    Line {
        from: DVec2,
        to: DVec2,
        from_color: Rgb,
        to_color: Rgb,
        alpha: f64,
        width: f64,
    },
}

/// Keeps every draw call in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingPainter {
    pub ops: Vec<PaintOp>,
}

impl RecordingPainter {
    pub fn lines(&self) -> impl Iterator<Item = &PaintOp> {
        self.ops.iter().filter(|op| matches!(op, PaintOp::Line { .. }))
    }

    pub fn discs(&self) -> impl Iterator<Item = &PaintOp> {
        self.ops.iter().filter(|op| matches!(op, PaintOp::Disc { .. }))
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, surface: Surface) {
        self.ops.push(PaintOp::Clear(surface));
    }

    fn glow_disc(&mut self, center: DVec2, radius: f64, color: Rgb, alpha: f64, blur: f64) {
        self.ops.push(PaintOp::Disc {
            center,
            radius,
            color,
            alpha,
            blur,
        });
    }

    fn gradient_line(
        &mut self,
        from: DVec2,
        to: DVec2,
        from_color: Rgb,
        to_color: Rgb,
        alpha: f64,
        width: f64,
    ) {
        self.ops.push(PaintOp::Line {
            from,
            to,
            from_color,
            to_color,
            alpha,
            width,
        });
    }
}
