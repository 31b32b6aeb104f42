//! Geometry for the skill radar chart.

use crate::constants::{RADAR_CENTER, RADAR_LABEL_OFFSET, RADAR_MAX_RADIUS, RADAR_RING_COUNT};
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent, 0..=100.
    pub value: f64,
    /// Axis angle in degrees, clockwise from the top.
    pub angle_deg: f64,
}

impl Skill {
    pub const fn new(name: &'static str, value: f64, angle_deg: f64) -> Self {
        Self {
            name,
            value,
            angle_deg,
        }
    }
}

pub const DEFAULT_SKILLS: [Skill; 6] = [
    Skill::new("RAG SYSTEMS", 95.0, 0.0),
    Skill::new("DATA ANALYTICS", 90.0, 60.0),
    Skill::new("FULL STACK", 85.0, 120.0),
    Skill::new("ML / FORECASTING", 80.0, 180.0),
    Skill::new("LLM AGENTS", 90.0, 240.0),
    Skill::new("PYTHON", 95.0, 300.0),
];

/// Point at `value` percent of `max_radius` along the axis at `angle_deg`
/// (0° points up, angles grow clockwise in screen space).
pub fn project(angle_deg: f64, value: f64, center: DVec2, max_radius: f64) -> DVec2 {
    let radius = value / 100.0 * max_radius;
    let radians = (angle_deg - 90.0).to_radians();
    center + radius * DVec2::new(radians.cos(), radians.sin())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarChart {
    pub center: DVec2,
    pub max_radius: f64,
    pub label_offset: f64,
}

impl Default for RadarChart {
    fn default() -> Self {
        Self {
            center: DVec2::from_array(RADAR_CENTER),
            max_radius: RADAR_MAX_RADIUS,
            label_offset: RADAR_LABEL_OFFSET,
        }
    }
}

impl RadarChart {
    pub fn point(&self, skill: &Skill) -> DVec2 {
        project(skill.angle_deg, skill.value, self.center, self.max_radius)
    }

    /// Outer end of the skill's axis (value 100).
    pub fn axis_end(&self, skill: &Skill) -> DVec2 {
        project(skill.angle_deg, 100.0, self.center, self.max_radius)
    }

    pub fn label_position(&self, skill: &Skill) -> DVec2 {
        let radius = self.max_radius + self.label_offset;
        project(skill.angle_deg, 100.0, self.center, radius)
    }

    pub fn polygon(&self, skills: &[Skill]) -> Vec<DVec2> {
        skills.iter().map(|s| self.point(s)).collect()
    }

    /// Radii of the evenly spaced background rings, innermost first.
    pub fn ring_radii(&self) -> [f64; RADAR_RING_COUNT] {
        std::array::from_fn(|i| self.max_radius * (i + 1) as f64 / RADAR_RING_COUNT as f64)
    }
}

/// SVG `points` attribute: `"x1,y1 x2,y2 ..."`.
pub fn points_attr(points: &[DVec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
