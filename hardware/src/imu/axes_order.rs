//! Axis orderings used when remapping IMU axes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Order of axes for Euler angles or axis remapping.
///
/// Each letter names the physical axis mapped onto the logical X, Y and Z
/// slot in turn. Orders that repeat an axis (proper Euler orders such as
/// `XYX`) are valid for angle decomposition but not for remapping.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    strum::EnumIter,
    strum::Display,
)]
#[allow(clippy::upper_case_acronyms)]
pub enum AxesOrder {
    XZX,
    XYX,
    YXY,
    YZY,
    ZYZ,
    ZXZ,
    XZY,
    XYZ,
    YXZ,
    YZX,
    ZYX,
    ZXY,
}

impl AxesOrder {
    /// Axis indices for each slot (X = 0, Y = 1, Z = 2).
    pub fn indices(self) -> [usize; 3] {
        use AxesOrder::*;
        match self {
            XZX => [0, 2, 0],
            XYX => [0, 1, 0],
            YXY => [1, 0, 1],
            YZY => [1, 2, 1],
            ZYZ => [2, 1, 2],
            ZXZ => [2, 0, 2],
            XZY => [0, 2, 1],
            XYZ => [0, 1, 2],
            YXZ => [1, 0, 2],
            YZX => [1, 2, 0],
            ZYX => [2, 1, 0],
            ZXY => [2, 0, 1],
        }
    }

    /// The same axes in reverse order.
    pub fn reverse(self) -> Self {
        use AxesOrder::*;
        match self {
            XZX => XZX,
            XYX => XYX,
            YXY => YXY,
            YZY => YZY,
            ZYZ => ZYZ,
            ZXZ => ZXZ,
            XZY => YZX,
            XYZ => ZYX,
            YXZ => ZXY,
            YZX => XZY,
            ZYX => XYZ,
            ZXY => YXZ,
        }
    }

    /// Whether every axis appears exactly once.
    pub fn is_permutation(self) -> bool {
        let [a, b, c] = self.indices();
        a != b && a != c && b != c
    }
}
