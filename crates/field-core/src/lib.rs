pub mod connections;
pub mod constants;
pub mod counter;
pub mod error;
pub mod field;
pub mod paint;
pub mod params;
pub mod particle;
pub mod progress;
pub mod radar;
pub mod sentiment;
pub mod session;
pub mod state;

pub use connections::*;
pub use constants::*;
pub use counter::*;
pub use error::*;
pub use field::*;
pub use paint::*;
pub use params::*;
pub use particle::*;
pub use radar::{RadarChart, Skill, DEFAULT_SKILLS};
pub use sentiment::{Prediction, SAMPLE_INPUTS};
pub use session::*;
pub use state::*;
