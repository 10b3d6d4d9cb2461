//! Helpers for drawing paths and robot poses on dashboard canvases.
//!
//! Every function here is a pure translation from pose/path data into
//! [`Canvas`] calls; none of them perform I/O.

use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use super::geometry::{Path, Pose2d};
use super::{Result, VizError};

/// Default spacing between path samples, in field units (inches).
pub const DEFAULT_RESOLUTION: f64 = 2.0;

/// Upper bound on the number of points [`sample_path`] will produce.
pub const MAX_PATH_SAMPLES: usize = 1_000_000;

/// Radius of the circular robot marker, in inches.
pub const ROBOT_RADIUS: f64 = 9.0;

/// Default robot footprint (length, width) in inches.
pub const DEFAULT_FOOTPRINT: (f64, f64) = (18.0, 18.0);

/// Default length of the heading indicator line in inches.
pub const DEFAULT_HEADING_LINE_LENGTH: f64 = 80.0;

/// Default number of poses kept for trail rendering.
pub const DEFAULT_POSE_HISTORY_LIMIT: usize = 100;

/// Drawing parameters for the field overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStyle {
    /// Path sampling resolution
    pub resolution: f64,
    /// Robot marker radius
    pub robot_radius: f64,
    /// Robot footprint length (along heading)
    pub footprint_length: f64,
    /// Robot footprint width
    pub footprint_width: f64,
    /// Heading line length
    pub heading_line_length: f64,
    /// Maximum poses kept in a trail, `None` for unbounded
    pub pose_history_limit: Option<usize>,
}

impl Default for DashboardStyle {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            robot_radius: ROBOT_RADIUS,
            footprint_length: DEFAULT_FOOTPRINT.0,
            footprint_width: DEFAULT_FOOTPRINT.1,
            heading_line_length: DEFAULT_HEADING_LINE_LENGTH,
            pose_history_limit: Some(DEFAULT_POSE_HISTORY_LIMIT),
        }
    }
}

/// Sample evenly spaced points along a path.
///
/// Produces `ceil(length / resolution)` points, the first at displacement 0
/// and the last at the end of the path. When that count is 1 or less a single
/// point at displacement 0 is returned.
///
/// # Errors
/// [`VizError::InvalidResolution`] for a non-positive or non-finite
/// resolution, [`VizError::InvalidPathLength`] for a non-positive or
/// non-finite path length, [`VizError::TooManySamples`] when the point count
/// would exceed [`MAX_PATH_SAMPLES`].
pub fn sample_path<P: Path + ?Sized>(path: &P, resolution: f64) -> Result<Vec<Vector2<f64>>> {
    if !resolution.is_finite() || resolution <= 0.0 {
        return Err(VizError::InvalidResolution(resolution));
    }
    let length = path.length();
    if !length.is_finite() || length <= 0.0 {
        return Err(VizError::InvalidPathLength(length));
    }

    let count = (length / resolution).ceil();
    if count > MAX_PATH_SAMPLES as f64 {
        return Err(VizError::TooManySamples(count));
    }
    let samples = count as usize;
    if samples <= 1 {
        return Ok(vec![path.get(0.0).position()]);
    }

    let dx = length / (samples - 1) as f64;
    Ok((0..samples)
        .map(|i| path.get(i as f64 * dx).position())
        .collect())
}

/// Draw a path as a polyline of evenly spaced samples.
pub fn draw_sampled_path<C, P>(canvas: &mut C, path: &P, resolution: f64) -> Result<()>
where
    C: Canvas + ?Sized,
    P: Path + ?Sized,
{
    let points = sample_path(path, resolution)?;
    let (xs, ys): (Vec<f64>, Vec<f64>) = points.iter().map(|p| (p.x, p.y)).unzip();
    canvas.stroke_polyline(&xs, &ys);
    Ok(())
}

/// Split a pose sequence into parallel x and y coordinate arrays.
pub fn project_pose_history<'a, I>(poses: I) -> (Vec<f64>, Vec<f64>)
where
    I: IntoIterator<Item = &'a Pose2d>,
{
    poses.into_iter().map(|p| (p.x, p.y)).unzip()
}

/// Draw a pose trail as a single polyline.
pub fn draw_pose_history<'a, C, I>(canvas: &mut C, poses: I)
where
    C: Canvas + ?Sized,
    I: IntoIterator<Item = &'a Pose2d>,
{
    let (xs, ys) = project_pose_history(poses);
    canvas.stroke_polyline(&xs, &ys);
}

/// Circle-plus-tick marker showing a robot's position and heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobotMarker {
    /// Circle center
    pub center: Vector2<f64>,
    /// Circle radius
    pub radius: f64,
    /// Heading tick start (half radius along heading)
    pub tick_start: Vector2<f64>,
    /// Heading tick end (full radius along heading)
    pub tick_end: Vector2<f64>,
}

/// Compute the marker geometry for a pose.
pub fn robot_marker(pose: &Pose2d, radius: f64) -> RobotMarker {
    let center = pose.position();
    let v = pose.heading_vec() * radius;
    RobotMarker {
        center,
        radius,
        tick_start: center + v / 2.0,
        tick_end: center + v,
    }
}

/// Draw a robot marker: a circle with a heading tick.
pub fn draw_robot<C: Canvas + ?Sized>(canvas: &mut C, pose: &Pose2d, radius: f64) {
    let marker = robot_marker(pose, radius);
    canvas.stroke_circle(marker.center.x, marker.center.y, marker.radius);
    canvas.stroke_line(
        marker.tick_start.x,
        marker.tick_start.y,
        marker.tick_end.x,
        marker.tick_end.y,
    );
}

/// Corners of a robot footprint rotated to the pose heading.
///
/// Order: back-right, back-left, front-left, front-right.
pub fn footprint_corners(pose: &Pose2d, length: f64, width: f64) -> [Vector2<f64>; 4] {
    let rotation = Rotation2::new(pose.heading);
    let center = pose.position();
    let (hl, hw) = (length / 2.0, width / 2.0);
    [
        Vector2::new(-hl, -hw),
        Vector2::new(-hl, hw),
        Vector2::new(hl, hw),
        Vector2::new(hl, -hw),
    ]
    .map(|corner| rotation * corner + center)
}

/// Draw the robot footprint as a closed rectangle.
pub fn draw_robot_footprint<C: Canvas + ?Sized>(
    canvas: &mut C,
    pose: &Pose2d,
    length: f64,
    width: f64,
) {
    let corners = footprint_corners(pose, length, width);
    let xs = corners.map(|c| c.x);
    let ys = corners.map(|c| c.y);
    canvas.stroke_polygon(&xs, &ys);
}

/// Draw a line from the pose out along its heading.
pub fn draw_heading_line<C: Canvas + ?Sized>(canvas: &mut C, pose: &Pose2d, line_length: f64) {
    let end = pose.position() + pose.heading_vec() * line_length;
    canvas.stroke_line(pose.x, pose.y, end.x, end.y);
}
