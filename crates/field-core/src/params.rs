use crate::constants::*;
use crate::error::{FieldError, Result};
use crate::particle::Rgb;

/// Knobs for one particle field. `Default` reproduces the portfolio background.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub count: usize,
    pub initial_speed: f64,
    pub radius_range: (f64, f64),
    pub alpha_range: (f64, f64),
    pub palette: &'static [Rgb],
    pub repulsion_radius: f64,
    pub repulsion_strength: f64,
    pub friction: f64,
    /// Per-axis random velocity kick each frame; 0 disables it.
    pub jitter: f64,
    pub link_distance: f64,
    pub link_max_opacity: f64,
    pub link_line_width: f64,
    pub glow_blur: f64,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            initial_speed: INITIAL_SPEED,
            radius_range: RADIUS_RANGE,
            alpha_range: ALPHA_RANGE,
            palette: &PALETTE,
            repulsion_radius: REPULSION_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            friction: FRICTION,
            jitter: JITTER,
            link_distance: LINK_DISTANCE,
            link_max_opacity: LINK_MAX_OPACITY,
            link_line_width: LINK_LINE_WIDTH,
            glow_blur: GLOW_BLUR,
            seed: None,
        }
    }
}

impl FieldParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Turn off the per-frame random kick so runs depend only on the seed.
    pub fn without_jitter(mut self) -> Self {
        self.jitter = 0.0;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.initial_speed,
            self.radius_range.0,
            self.radius_range.1,
            self.alpha_range.0,
            self.alpha_range.1,
            self.repulsion_radius,
            self.repulsion_strength,
            self.friction,
            self.jitter,
            self.link_distance,
            self.link_max_opacity,
            self.link_line_width,
            self.glow_blur,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(FieldError::InvalidParams("values must be finite"));
        }
        if self.palette.is_empty() {
            return Err(FieldError::InvalidParams("palette is empty"));
        }
        if self.initial_speed < 0.0 || self.jitter < 0.0 {
            return Err(FieldError::InvalidParams("speeds must not be negative"));
        }
        let (r_min, r_max) = self.radius_range;
        if r_min <= 0.0 || r_max < r_min {
            return Err(FieldError::InvalidParams("radius range must be positive and ordered"));
        }
        let (a_min, a_max) = self.alpha_range;
        if a_min <= 0.0 || a_max > 1.0 || a_max < a_min {
            return Err(FieldError::InvalidParams("alpha range must lie in (0, 1]"));
        }
        if self.friction <= 0.0 || self.friction > 1.0 {
            return Err(FieldError::InvalidParams("friction must lie in (0, 1]"));
        }
        if self.repulsion_radius <= 0.0 || self.link_distance <= 0.0 {
            return Err(FieldError::InvalidParams("distances must be positive"));
        }
        if !(0.0..=1.0).contains(&self.link_max_opacity) {
            return Err(FieldError::InvalidParams("link opacity must lie in [0, 1]"));
        }
        Ok(())
    }
}
