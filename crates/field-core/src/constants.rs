use crate::particle::Rgb;

// Shared tuning constants for the particle background and its widgets.

// Population
pub const PARTICLE_COUNT: usize = 60;
pub const INITIAL_SPEED: f64 = 0.15; // max |v| per axis at spawn
pub const RADIUS_RANGE: (f64, f64) = (1.0, 3.0);
pub const ALPHA_RANGE: (f64, f64) = (0.2, 0.7);

// Palette: cyan, violet, blue
pub const PALETTE: [Rgb; 3] = [
    Rgb::from_hex(0x00e1ff),
    Rgb::from_hex(0xb537f2),
    Rgb::from_hex(0x3b82f6),
];

// Pointer repulsion
pub const REPULSION_RADIUS: f64 = 150.0;
pub const REPULSION_STRENGTH: f64 = 0.02;

// Motion
pub const FRICTION: f64 = 0.99; // per-frame velocity multiplier
pub const JITTER: f64 = 0.01; // max per-axis random kick per frame

// Connection lines
pub const LINK_DISTANCE: f64 = 120.0;
pub const LINK_MAX_OPACITY: f64 = 0.15;
pub const LINK_LINE_WIDTH: f64 = 0.5;

// Particle glow
pub const GLOW_BLUR: f64 = 10.0;

// Radar chart layout (SVG viewBox units)
pub const RADAR_CENTER: [f64; 2] = [200.0, 200.0];
pub const RADAR_MAX_RADIUS: f64 = 160.0;
pub const RADAR_LABEL_OFFSET: f64 = 40.0;
pub const RADAR_RING_COUNT: usize = 4;

// Widgets
pub const COUNTER_DEFAULT_DURATION_MS: u64 = 2000;
pub const INFERENCE_DELAY_MS: i32 = 800;
