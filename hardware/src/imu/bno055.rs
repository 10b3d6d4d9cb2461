//! BNO055 axis remapping.
//!
//! The BNO055 lets the host swap and invert its sensing axes through two
//! registers, which must be written while the chip is in CONFIG mode:
//!
//! ```text
//! AXIS_MAP_CONFIG (0x41)
//! Bit:  7  6 |  5  4  |  3  2  |  1  0  |
//!   reserved | z axis | y axis | x axis |
//!
//! AXIS_MAP_SIGN (0x42)
//! Bit:  2 | 1 | 0
//!       x | y | z     (1 = negative)
//! ```
//!
//! The axes order appears to affect the onboard sensor fusion as well, so the
//! remap is done right after the IMU is initialized.
//!
//! # References
//!
//! - BNO055 datasheet (Bosch Sensortec BST-BNO055-DS000), section 3.4

use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use super::axes_order::AxesOrder;
use super::axes_signs::AxesSigns;
use super::axis_direction::AxisDirection;

/// Time to wait after each operating mode change.
pub const MODE_SETTLE: Duration = Duration::from_millis(100);

/// CONFIG operating mode value.
pub const CONFIG_MODE: u8 = 0x00;

/// BNO055 registers touched by the remap sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Operating mode
    OprMode = 0x3D,
    /// Axis remap configuration
    AxisMapConfig = 0x41,
    /// Axis remap signs
    AxisMapSign = 0x42,
}

impl Register {
    /// Register address on the bus.
    pub fn address(self) -> u8 {
        self as u8
    }
}

/// Register-level access to a BNO055.
///
/// Abstracts the I2C transport so the remap logic can be tested without
/// hardware.
pub trait ImuRegisters {
    /// Write one byte to a register.
    fn write_register(&mut self, register: Register, value: u8) -> Result<(), String>;

    /// Operating mode the IMU was configured to run in (restored after the remap).
    fn operating_mode(&self) -> u8;
}

/// Error for attempting an illegal remapping.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AxisRemapError {
    /// An axis appears more than once in the order.
    #[error("Same axis cannot be included in axes order twice: {0}")]
    DuplicateAxis(AxesOrder),

    /// The order and signs together produce a left-handed frame.
    #[error("Coordinate system is left-handed: {order} with {signs}")]
    LeftHanded {
        /// Requested axes order
        order: AxesOrder,
        /// Requested axes signs
        signs: AxesSigns,
    },

    /// Register write failed.
    #[error("Register write failed: {0}")]
    Bus(String),
}

/// Validated register values for an axis remap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRemap {
    /// AXIS_MAP_CONFIG value (6 bits)
    pub axis_map_config: u8,
    /// AXIS_MAP_SIGN value (3 bits)
    pub axis_map_sign: u8,
}

impl AxisRemap {
    /// Validate an order/signs pair and compute the register values.
    ///
    /// Swapping exactly two axes mirrors the frame, and so does an odd number
    /// of sign flips; the result is right-handed only when both or neither
    /// happen.
    pub fn compute(order: AxesOrder, signs: AxesSigns) -> Result<Self, AxisRemapError> {
        if !order.is_permutation() {
            return Err(AxisRemapError::DuplicateAxis(order));
        }
        let [x, y, z] = order.indices();

        let x_swapped = x != 0;
        let y_swapped = y != 1;
        let z_swapped = z != 2;
        let any_swapped = x_swapped || y_swapped || z_swapped;
        let all_swapped = x_swapped && y_swapped && z_swapped;
        let two_axes_swapped = any_swapped && !all_swapped;

        if two_axes_swapped != signs.has_odd_flips() {
            return Err(AxisRemapError::LeftHanded { order, signs });
        }

        let config = (z << 4 | y << 2 | x) as u8;
        Ok(Self {
            axis_map_config: config & 0x3F,
            axis_map_sign: signs.packed_value() & 0x07,
        })
    }
}

/// Remap IMU axes and signs.
///
/// Axes are swapped first, then the signs are applied to the swapped axes.
/// Switches the IMU to CONFIG mode, writes both remap registers and restores
/// the previous operating mode, waiting `settle` after each mode change
/// ([`MODE_SETTLE`] on real hardware).
///
/// Remapping axes can be confusing; prefer [`remap_z_axis`] when only the
/// vertical axis needs to change.
pub fn swap_then_flip_axes<I: ImuRegisters + ?Sized>(
    imu: &mut I,
    order: AxesOrder,
    signs: AxesSigns,
    settle: Duration,
) -> Result<AxisRemap, AxisRemapError> {
    let remap = AxisRemap::compute(order, signs)?;
    debug!(
        "Remapping IMU axes: order={order} signs={signs} config={:#04x} sign={:#04x}",
        remap.axis_map_config, remap.axis_map_sign
    );

    write(imu, Register::OprMode, CONFIG_MODE & 0x0F)?;
    thread::sleep(settle);

    write(imu, Register::AxisMapConfig, remap.axis_map_config)?;
    write(imu, Register::AxisMapSign, remap.axis_map_sign)?;

    let mode = imu.operating_mode() & 0x0F;
    write(imu, Register::OprMode, mode)?;
    thread::sleep(settle);

    Ok(remap)
}

fn write<I: ImuRegisters + ?Sized>(
    imu: &mut I,
    register: Register,
    value: u8,
) -> Result<(), AxisRemapError> {
    imu.write_register(register, value)
        .map_err(AxisRemapError::Bus)
}

/// Remap the IMU so that the remapped +Z faces `direction`.
///
/// See [`swap_then_flip_axes`] for details about the remapping.
pub fn remap_z_axis<I: ImuRegisters + ?Sized>(
    imu: &mut I,
    direction: AxisDirection,
    settle: Duration,
) -> Result<AxisRemap, AxisRemapError> {
    let (order, signs) = direction.z_axis_remap();
    swap_then_flip_axes(imu, order, signs, settle)
}

/// Translate legacy remap arguments into [`swap_then_flip_axes`] arguments.
///
/// The legacy form names the order in reverse and expresses signs relative to
/// the unswapped axes.
pub fn legacy_remap_args(order: AxesOrder, signs: AxesSigns) -> (AxesOrder, AxesSigns) {
    let first = order.indices()[0];
    let adjusted = signs.packed_value() as i32 ^ (4 >> first);
    (order.reverse(), AxesSigns::from_packed_value(adjusted))
}

/// Remap using the legacy parameter order.
#[deprecated(note = "unintuitive parameter order; use swap_then_flip_axes or remap_z_axis")]
pub fn remap_axes<I: ImuRegisters + ?Sized>(
    imu: &mut I,
    order: AxesOrder,
    signs: AxesSigns,
    settle: Duration,
) -> Result<AxisRemap, AxisRemapError> {
    let (order, signs) = legacy_remap_args(order, signs);
    swap_then_flip_axes(imu, order, signs, settle)
}
