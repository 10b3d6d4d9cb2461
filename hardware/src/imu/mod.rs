//! Inertial measurement unit axis configuration.
//!
//! The axis-sign table, axis orders and mount directions are plain data and
//! always available. Register-level remapping for the BNO055 is gated behind
//! the `bno055` feature.

mod axes_order;
mod axes_signs;
mod axis_direction;
#[cfg(feature = "bno055")]
pub mod bno055;

pub use axes_order::AxesOrder;
pub use axes_signs::{AxesSigns, AXES_SIGNS_MASK};
pub use axis_direction::AxisDirection;
#[cfg(feature = "bno055")]
pub use bno055::{
    remap_z_axis, swap_then_flip_axes, AxisRemap, AxisRemapError, ImuRegisters, Register,
    MODE_SETTLE,
};
