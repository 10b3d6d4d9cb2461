//! Physical IMU axis directions.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::axes_order::AxesOrder;
use super::axes_signs::AxesSigns;

/// A signed physical axis of the IMU package.
///
/// Used to say which way the hub's +Z should face after remapping, e.g. when
/// the control hub is mounted vertically.
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisDirection {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl AxisDirection {
    /// Order and signs that make the remapped +Z face this direction.
    pub fn z_axis_remap(self) -> (AxesOrder, AxesSigns) {
        match self {
            AxisDirection::PosX => (AxesOrder::ZYX, AxesSigns::NPP),
            AxisDirection::NegX => (AxesOrder::ZYX, AxesSigns::PPN),
            AxisDirection::PosY => (AxesOrder::XZY, AxesSigns::PNP),
            AxisDirection::NegY => (AxesOrder::XZY, AxesSigns::PPN),
            AxisDirection::PosZ => (AxesOrder::XYZ, AxesSigns::PPP),
            AxisDirection::NegZ => (AxesOrder::XYZ, AxesSigns::PNN),
        }
    }
}
