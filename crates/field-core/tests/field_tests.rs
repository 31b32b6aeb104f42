// Integration tests for the particle field: spawning, stepping, painting.

use field_core::*;
use glam::DVec2;

fn particle_at(x: f64, y: f64, color: Rgb) -> Particle {
    Particle::new(DVec2::new(x, y), DVec2::ZERO, 2.0, color, 0.5)
}

fn still_params() -> FieldParams {
    FieldParams::default().with_seed(7).without_jitter()
}

#[test]
fn spawns_configured_count_within_ranges() {
    let surface = Surface::new(800.0, 600.0);
    let field = ParticleField::new(surface, FieldParams::default().with_seed(1)).unwrap();
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    for p in field.particles() {
        assert!(surface.contains(p.pos), "spawned outside: {:?}", p.pos);
        assert!(p.vel.x.abs() <= INITIAL_SPEED && p.vel.y.abs() <= INITIAL_SPEED);
        assert!(p.radius >= RADIUS_RANGE.0 && p.radius <= RADIUS_RANGE.1);
        assert!(p.alpha >= ALPHA_RANGE.0 && p.alpha <= ALPHA_RANGE.1);
        assert!(PALETTE.contains(&p.color));
    }
}

#[test]
fn same_seed_spawns_same_population() {
    let surface = Surface::new(1024.0, 768.0);
    let a = ParticleField::new(surface, FieldParams::default().with_seed(99)).unwrap();
    let b = ParticleField::new(surface, FieldParams::default().with_seed(99)).unwrap();
    assert_eq!(a.particles(), b.particles());
    let c = ParticleField::new(surface, FieldParams::default().with_seed(100)).unwrap();
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn unusable_surface_is_rejected() {
    for (w, h) in [(0.0, 600.0), (800.0, 0.0), (-5.0, 10.0), (f64::NAN, 10.0)] {
        let res = ParticleField::new(Surface::new(w, h), FieldParams::default());
        assert!(
            matches!(res, Err(FieldError::UnusableSurface { .. })),
            "{w}x{h} accepted"
        );
    }
}

#[test]
fn invalid_params_are_rejected() {
    let params = FieldParams {
        friction: 1.5,
        ..FieldParams::default()
    };
    let res = ParticleField::new(Surface::new(800.0, 600.0), params);
    assert!(matches!(res, Err(FieldError::InvalidParams(_))));
}

#[test]
fn particle_on_pointer_is_not_repelled() {
    let surface = Surface::new(800.0, 600.0);
    let mut field = ParticleField::from_particles(
        surface,
        still_params(),
        vec![particle_at(400.0, 300.0, PALETTE[0])],
    )
    .unwrap();
    field.step(PointerState::new(400.0, 300.0));
    let p = &field.particles()[0];
    assert_eq!(p.pos, DVec2::new(400.0, 300.0));
    assert_eq!(p.vel, DVec2::ZERO);
}

#[test]
fn nearby_particle_moves_away_from_pointer() {
    let surface = Surface::new(800.0, 600.0);
    let pointer = PointerState::new(400.0, 300.0);
    let start = DVec2::new(430.0, 260.0);
    let mut field = ParticleField::from_particles(
        surface,
        still_params(),
        vec![particle_at(start.x, start.y, PALETTE[1])],
    )
    .unwrap();
    let before = start.distance(pointer.pos());
    field.step(pointer);
    let after = field.particles()[0].pos.distance(pointer.pos());
    assert!(after > before, "{after} <= {before}");
}

#[test]
fn far_particle_only_drifts_and_damps() {
    let surface = Surface::new(800.0, 600.0);
    let mut p = particle_at(100.0, 100.0, PALETTE[2]);
    p.vel = DVec2::new(1.0, -0.5);
    let mut field = ParticleField::from_particles(surface, still_params(), vec![p]).unwrap();
    field.step(PointerState::new(700.0, 500.0));
    let p = &field.particles()[0];
    assert_eq!(p.pos, DVec2::new(101.0, 99.5));
    assert_eq!(p.vel, DVec2::new(0.99, -0.495));
}

#[test]
fn leaving_an_edge_reappears_on_the_opposite_one() {
    let surface = Surface::new(800.0, 600.0);
    let mut left = particle_at(0.5, 300.0, PALETTE[0]);
    left.vel = DVec2::new(-1.0, 0.0);
    let mut bottom = particle_at(400.0, 599.5, PALETTE[0]);
    bottom.vel = DVec2::new(0.0, 1.0);
    let mut field =
        ParticleField::from_particles(surface, still_params(), vec![left, bottom]).unwrap();
    field.step(PointerState::new(-1000.0, -1000.0));
    let ps = field.particles();
    assert_eq!(ps[0].pos, DVec2::new(799.5, 300.0));
    assert_eq!(ps[1].pos, DVec2::new(400.0, 0.5));
}

#[test]
fn resize_keeps_particles_and_next_step_wraps_into_new_bounds() {
    let mut field =
        ParticleField::new(Surface::new(1600.0, 1200.0), still_params()).unwrap();
    let before = field.particles().to_vec();
    let small = Surface::new(320.0, 240.0);
    field.resize(small).unwrap();
    assert_eq!(field.particles(), &before[..]);
    assert_eq!(field.surface(), small);

    field.step(PointerState::new(-1000.0, -1000.0));
    for p in field.particles() {
        assert!(small.contains(p.pos), "{:?} outside {:?}", p.pos, small);
    }
}

#[test]
fn resize_to_unusable_surface_fails_and_keeps_bounds() {
    let surface = Surface::new(800.0, 600.0);
    let mut field = ParticleField::new(surface, still_params()).unwrap();
    assert!(field.resize(Surface::new(0.0, 0.0)).is_err());
    assert_eq!(field.surface(), surface);
}

#[test]
fn paint_draws_clear_then_discs_then_links() {
    let surface = Surface::new(800.0, 600.0);
    let particles = vec![
        particle_at(100.0, 100.0, PALETTE[0]),
        particle_at(150.0, 100.0, PALETTE[1]),
        particle_at(600.0, 500.0, PALETTE[2]),
    ];
    let field = ParticleField::from_particles(surface, still_params(), particles).unwrap();
    let mut painter = RecordingPainter::default();
    let drawn = field.paint(&mut painter);

    assert_eq!(drawn, 1);
    assert_eq!(painter.ops[0], PaintOp::Clear(surface));
    assert_eq!(painter.discs().count(), 3);
    assert!(matches!(
        painter.ops[1],
        PaintOp::Disc { blur, alpha, .. } if blur == GLOW_BLUR && alpha == 0.5
    ));
    let lines: Vec<_> = painter.lines().collect();
    assert_eq!(lines.len(), 1);
    match lines[0] {
        PaintOp::Line {
            from,
            to,
            from_color,
            to_color,
            alpha,
            width,
        } => {
            assert_eq!(*from, DVec2::new(100.0, 100.0));
            assert_eq!(*to, DVec2::new(150.0, 100.0));
            assert_eq!(*from_color, PALETTE[0]);
            assert_eq!(*to_color, PALETTE[1]);
            assert!((alpha - (1.0 - 50.0 / 120.0) * LINK_MAX_OPACITY).abs() < 1e-12);
            assert_eq!(*width, LINK_LINE_WIDTH);
        }
        other => panic!("unexpected op {other:?}"),
    }
    assert!(matches!(painter.ops.last(), Some(PaintOp::Line { .. })));
}

#[test]
fn links_cover_each_close_pair_once() {
    let ps = vec![
        particle_at(0.0, 0.0, PALETTE[0]),
        particle_at(60.0, 0.0, PALETTE[0]),
        particle_at(120.0, 0.0, PALETTE[0]),
        particle_at(119.0, 0.0, PALETTE[0]),
    ];
    let found: Vec<(usize, usize)> = links(&ps, LINK_DISTANCE, LINK_MAX_OPACITY)
        .map(|l| (l.a, l.b))
        .collect();
    // 0-2 sits exactly on the threshold and is excluded
    assert_eq!(found, vec![(0, 1), (0, 3), (1, 2), (1, 3), (2, 3)]);
}

#[test]
fn link_at_zero_distance_has_full_opacity() {
    let p = DVec2::new(5.0, 5.0);
    assert_eq!(link_opacity(p, p, 120.0, 0.15), Some(0.15));
    assert_eq!(link_opacity(p, p + DVec2::new(120.0, 0.0), 120.0, 0.15), None);
}

#[test]
fn full_field_links_are_bounded_by_pair_count() {
    let field = ParticleField::new(Surface::new(400.0, 300.0), still_params()).unwrap();
    let mut stats = PaintStats::default();
    let drawn = field.paint(&mut stats);
    let n = field.particles().len();
    assert_eq!(stats.clears, 1);
    assert_eq!(stats.discs, n);
    assert_eq!(stats.lines, drawn);
    assert!(drawn <= n * (n - 1) / 2);
}
