use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Run the particle field headlessly and print a position trace
pub struct Args {
    /// Surface width in pixels
    #[arg(long, default_value = "800")]
    pub width: f64,
    /// Surface height in pixels
    #[arg(long, default_value = "600")]
    pub height: f64,
    /// Number of particles
    #[arg(long, default_value = "60")]
    pub particles: usize,
    /// RNG seed
    #[arg(long, default_value = "42")]
    pub seed: u64,
    /// Frames to simulate
    #[arg(long, default_value = "100")]
    pub frames: u64,
    /// Fixed pointer position, as x,y
    #[arg(long, default_value = "400,300", value_parser = parse_point)]
    pub pointer: (f64, f64),
    /// Disable the per-frame random velocity kick
    #[arg(long)]
    pub no_jitter: bool,
    /// Print every Nth frame (the final frame is always printed)
    #[arg(long, default_value = "100")]
    pub every: u64,
}

pub fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y: {e}"))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("pointer must be finite, got {s:?}"));
    }
    Ok((x, y))
}
