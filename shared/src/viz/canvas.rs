//! Canvas abstraction for dashboard overlays.

use serde::{Deserialize, Serialize};

/// Drawing surface of the telemetry dashboard.
///
/// The dashboard library owns the real implementation; the helpers in this
/// module only translate robot data into these calls.
pub trait Canvas {
    /// Stroke an open polyline through parallel coordinate arrays.
    fn stroke_polyline(&mut self, xs: &[f64], ys: &[f64]);

    /// Stroke a circle outline.
    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64);

    /// Stroke a single line segment.
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    /// Stroke a closed polygon through parallel coordinate arrays.
    fn stroke_polygon(&mut self, xs: &[f64], ys: &[f64]);

    /// Set the stroke color for subsequent operations (e.g. `"#3F51B5"`).
    fn set_stroke(&mut self, _color: &str) {}
}

/// A single recorded canvas operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawOp {
    Polyline { xs: Vec<f64>, ys: Vec<f64> },
    Circle { x: f64, y: f64, radius: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Polygon { xs: Vec<f64>, ys: Vec<f64> },
    Stroke { color: String },
}

/// Canvas that records every operation in order.
///
/// Serializes to a JSON array of tagged operations, which is the form an
/// overlay takes when it is forwarded to a remote dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations recorded so far.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Take the recorded operations, leaving the canvas empty.
    pub fn take(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Canvas for RecordingCanvas {
    fn stroke_polyline(&mut self, xs: &[f64], ys: &[f64]) {
        self.ops.push(DrawOp::Polyline {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        });
    }

    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.ops.push(DrawOp::Circle { x, y, radius });
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.ops.push(DrawOp::Line { x1, y1, x2, y2 });
    }

    fn stroke_polygon(&mut self, xs: &[f64], ys: &[f64]) {
        self.ops.push(DrawOp::Polygon {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        });
    }

    fn set_stroke(&mut self, color: &str) {
        self.ops.push(DrawOp::Stroke {
            color: color.to_string(),
        });
    }
}
