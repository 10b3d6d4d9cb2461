//! IMU axis sign configurations.
//!
//! Describes which of the three remapped IMU axes are inverted. The packed
//! 3-bit value matches the BNO055 AXIS_MAP_SIGN register layout:
//!
//! ```text
//! Bit:  2  |  1  |  0
//!       X  |  Y  |  Z     (1 = negative)
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Mask selecting the packed sign bits.
pub const AXES_SIGNS_MASK: i32 = 0b111;

/// IMU axes signs in the order XYZ (after remapping).
///
/// `P` marks a positive axis, `N` a negative one.
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
#[repr(u8)]
#[allow(clippy::upper_case_acronyms)]
pub enum AxesSigns {
    PPP = 0b000,
    PPN = 0b001,
    PNP = 0b010,
    PNN = 0b011,
    NPP = 0b100,
    NPN = 0b101,
    NNP = 0b110,
    NNN = 0b111,
}

/// Variants indexed by packed value.
const BY_PACKED_VALUE: [AxesSigns; 8] = [
    AxesSigns::PPP,
    AxesSigns::PPN,
    AxesSigns::PNP,
    AxesSigns::PNN,
    AxesSigns::NPP,
    AxesSigns::NPN,
    AxesSigns::NNP,
    AxesSigns::NNN,
];

impl AxesSigns {
    /// Look up the configuration for a packed value.
    ///
    /// Only the low three bits are used, so every input maps to a variant.
    pub fn from_packed_value(value: i32) -> Self {
        BY_PACKED_VALUE[(value & AXES_SIGNS_MASK) as usize]
    }

    /// Build from per-axis flags.
    pub fn new(x_negative: bool, y_negative: bool, z_negative: bool) -> Self {
        let packed = (x_negative as i32) << 2 | (y_negative as i32) << 1 | z_negative as i32;
        Self::from_packed_value(packed)
    }

    /// The packed 3-bit value.
    pub fn packed_value(self) -> u8 {
        self as u8
    }

    /// Whether the axis at `index` (0 = X, 1 = Y, 2 = Z) is inverted.
    ///
    /// Returns `None` for an index past Z.
    pub fn is_negative(self, index: usize) -> Option<bool> {
        let shift = 2usize.checked_sub(index)?;
        Some((self.packed_value() >> shift) & 1 == 1)
    }

    /// Whether an odd number of axes are inverted.
    ///
    /// An odd flip count mirrors the coordinate frame.
    pub fn has_odd_flips(self) -> bool {
        self.packed_value().count_ones() % 2 == 1
    }
}

impl From<AxesSigns> for u8 {
    fn from(signs: AxesSigns) -> Self {
        signs.packed_value()
    }
}
