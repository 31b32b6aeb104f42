use crate::constants::MAX_PARTICLES;
use field_core::{FieldParams, Surface};
use glam::DVec2;
use std::str::FromStr;

// ---------------- Pointer mapping ----------------

/// Map a client-space (CSS px) pointer position onto the canvas backing store.
///
/// `rect_origin`/`rect_size` are the canvas bounding rect. A collapsed rect
/// falls back to the unscaled offset.
#[inline]
pub fn client_to_surface(
    client: DVec2,
    rect_origin: DVec2,
    rect_size: DVec2,
    surface: Surface,
) -> DVec2 {
    let local = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        local / rect_size * surface.size()
    } else {
        local
    }
}

/// Backing-store size for a viewport of `inner_width × inner_height` CSS px.
#[inline]
pub fn viewport_surface(inner_width: f64, inner_height: f64) -> Surface {
    let clamp = |v: f64| if v.is_finite() { v.floor().max(0.0) } else { 0.0 };
    Surface::new(clamp(inner_width), clamp(inner_height))
}

// ---------------- Attribute parsing ----------------

#[inline]
pub fn parse_attr<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|s| s.trim().parse().ok())
}

/// Field parameters for a canvas, honouring its optional data attributes.
pub fn params_from_attrs(particles: Option<&str>, seed: Option<&str>) -> FieldParams {
    let mut params = FieldParams::default();
    if let Some(count) = parse_attr::<usize>(particles) {
        params.count = count.min(MAX_PARTICLES);
    }
    if let Some(seed) = parse_attr::<u64>(seed) {
        params.seed = Some(seed);
    }
    params
}
