//! Shared telemetry and log maintenance utilities for robot code.
//!
//! - [`log_quota`] - keeps a log directory tree under a byte quota
//! - [`viz`] - translates poses and paths into dashboard canvas calls
//! - [`config_storage`] - JSON-backed settings for the above (`config-storage` feature)

#[cfg(feature = "config-storage")]
pub mod config_storage;
pub mod log_quota;
pub mod viz;

pub use log_quota::{LogFile, LogQuotaManager, PruneReport, DEFAULT_LOG_ROOT, LOG_QUOTA_BYTES};
