// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use field_core::{
    FieldParams, FRICTION, JITTER, LINK_DISTANCE, LINK_MAX_OPACITY, PALETTE, PARTICLE_COUNT,
    REPULSION_RADIUS, REPULSION_STRENGTH,
};

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_constants_are_within_reasonable_bounds() {
    // Friction must damp, not amplify
    assert!(FRICTION > 0.0 && FRICTION < 1.0);
    // Jitter alone must settle well below the repulsion kick
    assert!(JITTER < REPULSION_STRENGTH);
    assert!(REPULSION_RADIUS > 0.0 && LINK_DISTANCE > 0.0);
    assert!(LINK_MAX_OPACITY > 0.0 && LINK_MAX_OPACITY <= 1.0);
    assert_eq!(PALETTE.len(), 3);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_cap_allows_default_population() {
    assert!(MAX_PARTICLES >= PARTICLE_COUNT);
    assert!(FieldParams::default().with_count(MAX_PARTICLES).validate().is_ok());
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        RADAR_POLYGON_ID,
        RADAR_RINGS_ID,
        RADAR_AXES_ID,
        RADAR_POINTS_ID,
        RADAR_LABELS_ID,
        RUN_INFERENCE_ID,
        RANDOM_SAMPLE_ID,
        INFERENCE_INPUT_ID,
        PRED_LABEL_ID,
        PRED_POSITIVE_ID,
        PRED_NEUTRAL_ID,
        PRED_NEGATIVE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn counter_attributes_share_prefix() {
    assert!(COUNTER_SELECTOR.contains(ATTR_COUNTER_END));
    assert!(ATTR_COUNTER_DURATION.starts_with("data-counter-"));
    assert!(ATTR_COUNTER_SUFFIX.starts_with("data-counter-"));
}
