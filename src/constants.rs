// DOM hooks and front-end limits for the web build.

// Particle background
pub const CANVAS_ID: &str = "particle-canvas";
pub const ATTR_PARTICLES: &str = "data-particles"; // optional particle count override
pub const ATTR_SEED: &str = "data-seed"; // optional fixed RNG seed
pub const MAX_PARTICLES: usize = 2000; // keeps the O(n²) link pass affordable

// Animated counters
pub const COUNTER_SELECTOR: &str = "[data-counter-end]";
pub const ATTR_COUNTER_END: &str = "data-counter-end";
pub const ATTR_COUNTER_DURATION: &str = "data-counter-duration"; // milliseconds
pub const ATTR_COUNTER_SUFFIX: &str = "data-counter-suffix";

// Skill radar (SVG)
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const RADAR_POLYGON_ID: &str = "radar-polygon";
pub const RADAR_RINGS_ID: &str = "radar-rings";
pub const RADAR_AXES_ID: &str = "radar-axes";
pub const RADAR_POINTS_ID: &str = "radar-points";
pub const RADAR_LABELS_ID: &str = "radar-labels";
pub const RADAR_POINT_RADIUS: f64 = 4.0;

// Sentiment playground
pub const RUN_INFERENCE_ID: &str = "run-inference";
pub const RANDOM_SAMPLE_ID: &str = "random-sample";
pub const INFERENCE_INPUT_ID: &str = "inference-input";
pub const PRED_LABEL_ID: &str = "pred-label";
pub const PRED_POSITIVE_ID: &str = "pred-positive";
pub const PRED_NEUTRAL_ID: &str = "pred-neutral";
pub const PRED_NEGATIVE_ID: &str = "pred-negative";
pub const PRED_BAR_SUFFIX: &str = "-bar"; // e.g. #pred-positive-bar
