//! Bounded pose trail for overlay rendering.

use std::collections::VecDeque;

use super::canvas::Canvas;
use super::dashboard::draw_pose_history;
use super::geometry::Pose2d;

/// FIFO of recent poses.
///
/// Consecutive duplicates are dropped so a stationary robot does not flush
/// the trail. When a limit is set, the oldest pose is evicted once the trail
/// grows past it.
#[derive(Debug, Clone, Default)]
pub struct PoseHistory {
    poses: VecDeque<Pose2d>,
    limit: Option<usize>,
}

impl PoseHistory {
    /// Create a trail holding at most `limit` poses (`None` for unbounded).
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            poses: VecDeque::new(),
            limit,
        }
    }

    /// Append a pose. Returns false if it repeated the last pose and was skipped.
    pub fn push(&mut self, pose: Pose2d) -> bool {
        if self.poses.back() == Some(&pose) {
            return false;
        }
        self.poses.push_back(pose);
        if let Some(limit) = self.limit {
            while self.poses.len() > limit {
                self.poses.pop_front();
            }
        }
        true
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Most recent pose.
    pub fn latest(&self) -> Option<&Pose2d> {
        self.poses.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pose2d> {
        self.poses.iter()
    }

    pub fn clear(&mut self) {
        self.poses.clear();
    }

    /// Draw the trail as a polyline.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        draw_pose_history(canvas, self.poses.iter());
    }
}
