//! Property-based tests for the particle field
//!
//! Uses proptest to check the wraparound, damping, repulsion and connection
//! invariants over random seeds, surfaces and pointer positions.

use field_core::*;
use glam::DVec2;
use proptest::prelude::*;

// Worst case per frame: repulsion adds at most REPULSION_STRENGTH, jitter at
// most JITTER per axis, and friction removes 1%. Steady state stays well
// under these bounds.
const SPEED_BOUND_WITH_POINTER: f64 = 3.5;
const SPEED_BOUND_NO_POINTER: f64 = 1.5;

fn surface_strategy() -> impl Strategy<Value = Surface> {
    (1.0f64..2000.0, 1.0f64..2000.0).prop_map(|(w, h)| Surface::new(w, h))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Positions stay inside [0, W) x [0, H) whatever the pointer does.
    #[test]
    fn positions_stay_on_surface(
        seed in any::<u64>(),
        surface in surface_strategy(),
        pointers in prop::collection::vec((-100.0f64..2100.0, -100.0f64..2100.0), 1..40),
    ) {
        let mut field = ParticleField::new(surface, FieldParams::default().with_seed(seed)).unwrap();
        for (x, y) in pointers {
            for _ in 0..5 {
                field.step(PointerState::new(x, y));
            }
            for p in field.particles() {
                prop_assert!(surface.contains(p.pos), "{:?} outside {:?}", p.pos, surface);
            }
        }
    }

    /// Damping keeps speeds bounded over long runs without pointer movement.
    #[test]
    fn velocity_does_not_diverge(seed in any::<u64>()) {
        let surface = Surface::new(800.0, 600.0);
        let mut idle = ParticleField::new(surface, FieldParams::default().with_seed(seed)).unwrap();
        let mut away = ParticleField::new(surface, FieldParams::default().with_seed(seed)).unwrap();
        let far = PointerState::new(-1.0e6, -1.0e6);
        for _ in 0..2000 {
            idle.step(PointerState::default());
            away.step(far);
        }
        prop_assert!(idle.max_speed() < SPEED_BOUND_WITH_POINTER, "{}", idle.max_speed());
        prop_assert!(away.max_speed() < SPEED_BOUND_NO_POINTER, "{}", away.max_speed());
    }

    /// A still particle inside the repulsion radius ends up farther away.
    #[test]
    fn repulsion_pushes_outward(
        angle in 0.0f64..std::f64::consts::TAU,
        dist in 0.5f64..149.0,
    ) {
        let surface = Surface::new(800.0, 600.0);
        let pointer = DVec2::new(400.0, 300.0);
        let start = pointer + dist * DVec2::new(angle.cos(), angle.sin());
        let particle = Particle::new(start, DVec2::ZERO, 1.0, PALETTE[0], 0.5);
        let params = FieldParams::default().with_seed(1).without_jitter();
        let mut field = ParticleField::from_particles(surface, params, vec![particle]).unwrap();
        let before = start.distance(pointer);
        field.step(PointerState::new(pointer.x, pointer.y));
        let after = field.particles()[0].pos.distance(pointer);
        prop_assert!(after > before, "{} <= {}", after, before);
    }

    /// Links are symmetric and exist exactly below the threshold.
    #[test]
    fn links_are_symmetric(
        ax in -500.0f64..500.0, ay in -500.0f64..500.0,
        bx in -500.0f64..500.0, by in -500.0f64..500.0,
    ) {
        let a = DVec2::new(ax, ay);
        let b = DVec2::new(bx, by);
        let ab = link_opacity(a, b, LINK_DISTANCE, LINK_MAX_OPACITY);
        let ba = link_opacity(b, a, LINK_DISTANCE, LINK_MAX_OPACITY);
        prop_assert_eq!(ab, ba);
        prop_assert_eq!(ab.is_some(), a.distance(b) < LINK_DISTANCE);
        if let Some(o) = ab {
            prop_assert!(o > 0.0 && o <= LINK_MAX_OPACITY);
        }
    }

    /// Counters never count down and land exactly on their end value.
    #[test]
    fn counter_is_monotonic(
        end in 0u64..1_000_000_000,
        duration_ms in 1u64..10_000,
        steps in prop::collection::vec(0u64..20_000, 1..30),
    ) {
        let counter = AnimatedCounter::new(end, std::time::Duration::from_millis(duration_ms));
        let mut elapsed: Vec<u64> = steps;
        elapsed.sort_unstable();
        let mut last = 0;
        for ms in elapsed {
            let v = counter.value_at(std::time::Duration::from_millis(ms));
            prop_assert!(v >= last && v <= end);
            last = v;
        }
        prop_assert_eq!(counter.value_at(std::time::Duration::from_millis(duration_ms)), end);
    }
}
