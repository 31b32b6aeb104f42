use clap::Parser;
use field_core::{AnimationSession, Continuation, FieldParams, PaintStats, Surface};
use glam::DVec2;
use std::io::{self, BufWriter, Write};

mod args;

use args::Args;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut params = FieldParams::default()
        .with_seed(args.seed)
        .with_count(args.particles);
    if args.no_jitter {
        params = params.without_jitter();
    }
    let surface = Surface::new(args.width, args.height);
    let mut session = AnimationSession::mount(surface, params)?;
    session.pointer_moved(args.pointer.0, args.pointer.1);
    log::info!(
        "tracing {} particles on {}x{} for {} frames (seed {}, jitter {})",
        args.particles,
        args.width,
        args.height,
        args.frames,
        args.seed,
        if args.no_jitter { "off" } else { "on" }
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let every = args.every.max(1);
    let mut stats = PaintStats::default();
    for frame in 1..=args.frames {
        if session.run(&mut stats) == Continuation::Halt {
            break;
        }
        if frame % every == 0 || frame == args.frames {
            write_frame(&mut out, frame, &session)?;
        }
    }
    out.flush()?;

    let pointer = DVec2::new(args.pointer.0, args.pointer.1);
    let nearest = session
        .field()
        .particles()
        .iter()
        .map(|p| p.pos.distance(pointer))
        .fold(f64::INFINITY, f64::min);
    log::info!(
        "done: frames={} discs={} lines={} last_links={} max_speed={:.4} nearest_to_pointer={:.2}",
        session.frames(),
        stats.discs,
        stats.lines,
        session.last_links(),
        session.field().max_speed(),
        nearest
    );
    Ok(())
}

/// One line per particle: `frame index x y vx vy`, floats in round-trip form.
fn write_frame(out: &mut impl Write, frame: u64, session: &AnimationSession) -> io::Result<()> {
    for (i, p) in session.field().particles().iter().enumerate() {
        writeln!(
            out,
            "{} {} {:?} {:?} {:?} {:?}",
            frame, i, p.pos.x, p.pos.y, p.vel.x, p.vel.y
        )?;
    }
    Ok(())
}
