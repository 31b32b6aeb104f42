use crate::particle::Particle;
use glam::DVec2;

/// A line to draw between particles `a` and `b` (`a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f64,
}

/// Opacity of the line between two points, or `None` when they are too far
/// apart. Fades linearly from `max_opacity` at zero distance to 0 at `threshold`.
#[inline]
pub fn link_opacity(a: DVec2, b: DVec2, threshold: f64, max_opacity: f64) -> Option<f64> {
    let dist = (a - b).length();
    (dist < threshold).then(|| (1.0 - dist / threshold) * max_opacity)
}

/// Every unordered pair closer than `threshold`. Quadratic in the particle count.
pub fn links(
    particles: &[Particle],
    threshold: f64,
    max_opacity: f64,
) -> impl Iterator<Item = Link> + '_ {
    particles.iter().enumerate().flat_map(move |(i, p)| {
        particles[i + 1..]
            .iter()
            .enumerate()
            .filter_map(move |(k, q)| {
                link_opacity(p.pos, q.pos, threshold, max_opacity).map(|opacity| Link {
                    a: i,
                    b: i + 1 + k,
                    opacity,
                })
            })
    })
}
