//! Field overlay drawing for the telemetry dashboard.

use thiserror::Error;

/// Error types for dashboard drawing operations.
///
/// Raised when drawing input violates a precondition of the sampling or
/// projection routines.
#[derive(Debug, Error, PartialEq)]
pub enum VizError {
    /// Sampling resolution must be finite and strictly positive.
    #[error("Invalid sampling resolution: {0}")]
    InvalidResolution(f64),

    /// Path length must be finite and strictly positive.
    #[error("Invalid path length: {0}")]
    InvalidPathLength(f64),

    /// Resolution is so fine relative to the path length that the sample
    /// count exceeds [`dashboard::MAX_PATH_SAMPLES`].
    #[error("Too many path samples requested: {0}")]
    TooManySamples(f64),
}

/// Standard Result type for all drawing operations.
pub type Result<T> = std::result::Result<T, VizError>;

pub mod canvas;
pub mod dashboard;
pub mod geometry;
pub mod pose_history;

pub use canvas::{Canvas, DrawOp, RecordingCanvas};
pub use dashboard::{
    draw_heading_line, draw_pose_history, draw_robot, draw_robot_footprint, draw_sampled_path,
    project_pose_history, robot_marker, sample_path, DashboardStyle, RobotMarker,
    DEFAULT_RESOLUTION, MAX_PATH_SAMPLES, ROBOT_RADIUS,
};
pub use geometry::{LinePath, Path, Pose2d};
pub use pose_history::PoseHistory;
