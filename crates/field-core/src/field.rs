use crate::connections::links;
use crate::error::Result;
use crate::paint::Painter;
use crate::params::FieldParams;
use crate::particle::{signed_unit, Particle};
use crate::state::{PointerState, Surface};
use glam::DVec2;
use rand::prelude::*;

/// A fixed population of particles drifting over a surface.
pub struct ParticleField {
    surface: Surface,
    params: FieldParams,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    /// Spawn `params.count` random particles on `surface`.
    pub fn new(surface: Surface, params: FieldParams) -> Result<Self> {
        let surface = surface.ensure_usable()?;
        params.validate()?;
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let particles = (0..params.count)
            .map(|_| Particle::spawn(&mut rng, surface, &params))
            .collect::<Vec<_>>();
        log::debug!(
            "[field] spawned {} particles on {}x{}",
            particles.len(),
            surface.width,
            surface.height
        );
        Ok(Self {
            surface,
            params,
            particles,
            rng,
        })
    }

    /// Use a hand-placed population instead of spawning one. Positions outside
    /// the surface are wrapped onto it.
    pub fn from_particles(
        surface: Surface,
        params: FieldParams,
        mut particles: Vec<Particle>,
    ) -> Result<Self> {
        let surface = surface.ensure_usable()?;
        params.validate()?;
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        for p in &mut particles {
            p.wrap(surface);
        }
        Ok(Self {
            surface,
            params,
            particles,
            rng,
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// Change the wrap bounds. Particles keep their positions; any now outside
    /// are brought back by the next step.
    pub fn resize(&mut self, surface: Surface) -> Result<()> {
        self.surface = surface.ensure_usable()?;
        Ok(())
    }

    /// Advance every particle by one frame against a single pointer snapshot.
    pub fn step(&mut self, pointer: PointerState) {
        let pointer = pointer.pos();
        let FieldParams {
            repulsion_radius,
            repulsion_strength,
            friction,
            jitter,
            ..
        } = self.params;
        for p in &mut self.particles {
            p.repel_from(pointer, repulsion_radius, repulsion_strength);
            p.advance(friction);
            if jitter > 0.0 {
                p.vel += DVec2::new(
                    signed_unit(&mut self.rng) * jitter,
                    signed_unit(&mut self.rng) * jitter,
                );
            }
            p.wrap(self.surface);
        }
    }

    /// Draw the current frame: clear, particles with glow, then links.
    /// Returns the number of links drawn.
    pub fn paint<P: Painter>(&self, painter: &mut P) -> usize {
        painter.clear(self.surface);
        for p in &self.particles {
            painter.glow_disc(p.pos, p.radius, p.color, p.alpha, self.params.glow_blur);
        }
        let mut drawn = 0;
        for link in links(
            &self.particles,
            self.params.link_distance,
            self.params.link_max_opacity,
        ) {
            let (a, b) = (&self.particles[link.a], &self.particles[link.b]);
            painter.gradient_line(
                a.pos,
                b.pos,
                a.color,
                b.color,
                link.opacity,
                self.params.link_line_width,
            );
            drawn += 1;
        }
        drawn
    }

    /// Largest particle speed, for diagnostics.
    pub fn max_speed(&self) -> f64 {
        self.particles
            .iter()
            .map(|p| p.vel.length())
            .fold(0.0, f64::max)
    }
}
