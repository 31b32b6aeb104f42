use crate::params::FieldParams;
use crate::state::Surface;
use glam::DVec2;
use rand::Rng;
use std::fmt;

/// 8-bit sRGB colour, displayed as a CSS hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from `0xRRGGBB`.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }

    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub color: Rgb,
    pub alpha: f64,
}

impl Particle {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64, color: Rgb, alpha: f64) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            alpha,
        }
    }

    /// Random particle somewhere on `surface`, drawn from the ranges in `params`.
    /// `params.palette` must be non-empty.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, surface: Surface, params: &FieldParams) -> Self {
        let pos = DVec2::new(
            rng.gen::<f64>() * surface.width,
            rng.gen::<f64>() * surface.height,
        );
        let vel = DVec2::new(
            signed_unit(rng) * params.initial_speed,
            signed_unit(rng) * params.initial_speed,
        );
        let radius = lerp_range(params.radius_range, rng.gen::<f64>());
        let color = params.palette[rng.gen_range(0..params.palette.len())];
        let alpha = lerp_range(params.alpha_range, rng.gen::<f64>());
        Self::new(pos, vel, radius, color, alpha)
    }

    /// Push the particle away from `pointer` when it is closer than `radius`.
    ///
    /// The kick falls off linearly from `strength` at the pointer to zero at
    /// `radius`. A particle exactly on the pointer has no direction and is
    /// left alone. Returns whether a kick was applied.
    pub fn repel_from(&mut self, pointer: DVec2, radius: f64, strength: f64) -> bool {
        let d = pointer - self.pos;
        let dist = d.length();
        if dist == 0.0 || dist >= radius {
            return false;
        }
        let force = (radius - dist) / radius;
        self.vel -= d / dist * force * strength;
        true
    }

    /// Integrate one frame, then apply friction. No timestep scaling.
    #[inline]
    pub fn advance(&mut self, friction: f64) {
        self.pos += self.vel;
        self.vel *= friction;
    }

    #[inline]
    pub fn wrap(&mut self, surface: Surface) {
        self.pos.x = wrap_coord(self.pos.x, surface.width);
        self.pos.y = wrap_coord(self.pos.y, surface.height);
    }
}

/// Teleport a coordinate that left `[0, extent)` to the opposite edge.
///
/// Result is always in `[0, extent)` for finite input and positive `extent`.
pub fn wrap_coord(v: f64, extent: f64) -> f64 {
    let mut w = if v < 0.0 {
        v + extent
    } else if v >= extent {
        v - extent
    } else {
        return v;
    };
    if !(0.0..extent).contains(&w) {
        w = w.rem_euclid(extent);
    }
    // rem_euclid and the additions above can round up to exactly `extent`
    if w >= extent {
        0.0
    } else {
        w
    }
}

/// Uniform sample in `[-1, 1)`.
#[inline]
pub(crate) fn signed_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.gen::<f64>() - 0.5) * 2.0
}

#[inline]
fn lerp_range((min, max): (f64, f64), t: f64) -> f64 {
    min + t * (max - min)
}
