//! Pose and path types consumed by the drawing helpers.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Planar robot pose: position plus heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose2d {
    /// X position in field units (inches)
    pub x: f64,
    /// Y position in field units (inches)
    pub y: f64,
    /// Heading in radians, counter-clockwise from +X
    pub heading: f64,
}

impl Pose2d {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }

    /// Position as a vector.
    pub fn position(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Unit vector pointing along the heading.
    pub fn heading_vec(&self) -> Vector2<f64> {
        Vector2::new(self.heading.cos(), self.heading.sin())
    }
}

impl Default for Pose2d {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Parametric path evaluated by arc-length displacement.
///
/// Implemented by the motion-planning library's path type; the drawing helpers
/// only need its length and pose lookup.
pub trait Path {
    /// Total arc length.
    fn length(&self) -> f64;

    /// Pose at the given displacement along the path, in `[0, length]`.
    fn get(&self, displacement: f64) -> Pose2d;
}

/// Straight segment between two points, heading along the segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePath {
    start: Vector2<f64>,
    end: Vector2<f64>,
}

impl LinePath {
    pub fn new(start: Vector2<f64>, end: Vector2<f64>) -> Self {
        Self { start, end }
    }
}

impl Path for LinePath {
    fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    fn get(&self, displacement: f64) -> Pose2d {
        let delta = self.end - self.start;
        let length = delta.norm();
        let heading = delta.y.atan2(delta.x);
        if length == 0.0 {
            return Pose2d::new(self.start.x, self.start.y, heading);
        }
        let t = (displacement / length).clamp(0.0, 1.0);
        let point = self.start + delta * t;
        Pose2d::new(point.x, point.y, heading)
    }
}
