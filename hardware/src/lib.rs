//! Sensor drivers and configuration helpers for robot hardware.
//!
//! # Features
//!
//! ## Individual Drivers
//! - `bno055` - BNO055 IMU axis remapping (register sequence and validation)

pub mod imu;
