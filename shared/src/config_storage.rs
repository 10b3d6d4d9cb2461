//! Configuration storage for telemetry and logging settings.
//!
//! Provides centralized storage for robot-side configuration such as the log
//! directory, its quota and dashboard drawing parameters.
//! All config is stored in ~/.robot_config/ by default.

use crate::log_quota::{LogQuotaManager, DEFAULT_LOG_ROOT, LOG_QUOTA_BYTES};
use crate::viz::DashboardStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading or saving configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Telemetry and log maintenance settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Root directory for log files
    pub log_root: PathBuf,
    /// Maximum total size of the log tree in bytes
    pub log_quota_bytes: u64,
    /// Field overlay drawing parameters
    pub dashboard: DashboardStyle,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_root: PathBuf::from(DEFAULT_LOG_ROOT),
            log_quota_bytes: LOG_QUOTA_BYTES,
            dashboard: DashboardStyle::default(),
        }
    }
}

impl TelemetryConfig {
    /// Build a quota manager for the configured log root.
    pub fn log_quota_manager(&self) -> LogQuotaManager {
        LogQuotaManager::new(&self.log_root, self.log_quota_bytes)
    }

    /// Load from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save as pretty-printed JSON.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Configuration storage manager.
///
/// Manages loading and saving of configuration files from a centralized
/// directory (defaults to ~/.robot_config/).
#[derive(Debug, Clone)]
pub struct ConfigStorage {
    /// Root directory for all configuration (e.g., ~/.robot_config)
    root_path: PathBuf,
}

impl ConfigStorage {
    /// Create a new config storage with default path (~/.robot_config)
    pub fn new() -> std::io::Result<Self> {
        let home = std::env::var("HOME")
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::NotFound, "HOME not set"))?;
        let root_path = PathBuf::from(home).join(".robot_config");
        Ok(Self { root_path })
    }

    /// Create a new config storage with custom root path
    pub fn with_path(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Get the root configuration path
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Get the telemetry config file path
    fn telemetry_config_path(&self) -> PathBuf {
        self.root_path.join("telemetry.json")
    }

    /// Get the telemetry configuration.
    ///
    /// Returns None if no configuration exists.
    /// Returns Some(Err) if the file exists but cannot be loaded.
    pub fn get_telemetry_config(&self) -> Option<Result<TelemetryConfig, ConfigError>> {
        let path = self.telemetry_config_path();

        if !path.exists() {
            return None;
        }

        Some(TelemetryConfig::load_from_file(&path))
    }

    /// Get the stored telemetry configuration, or defaults if none is stored.
    pub fn telemetry_config_or_default(&self) -> Result<TelemetryConfig, ConfigError> {
        self.get_telemetry_config()
            .unwrap_or_else(|| Ok(TelemetryConfig::default()))
    }

    /// Save the telemetry configuration.
    ///
    /// Creates the config directory if it doesn't exist.
    /// Returns the path where the configuration was saved.
    pub fn save_telemetry_config(&self, config: &TelemetryConfig) -> Result<PathBuf, ConfigError> {
        std::fs::create_dir_all(&self.root_path)?;

        let path = self.telemetry_config_path();
        config.save_to_file(&path)?;
        Ok(path)
    }

    /// Delete the telemetry configuration.
    ///
    /// Returns Ok(true) if the file was deleted, Ok(false) if it didn't exist.
    pub fn delete_telemetry_config(&self) -> std::io::Result<bool> {
        let path = self.telemetry_config_path();

        if !path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(path)?;
        Ok(true)
    }
}

impl Default for ConfigStorage {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_path(PathBuf::from(".robot_config")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage(dir: &TempDir) -> ConfigStorage {
        ConfigStorage::with_path(dir.path().join("robot_config"))
    }

    #[test]
    fn test_telemetry_config_path() {
        let dir = TempDir::new().unwrap();
        let storage = create_test_storage(&dir);
        let path = storage.telemetry_config_path();

        assert!(path.to_str().unwrap().ends_with("telemetry.json"));
    }

    #[test]
    fn test_defaults() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_quota_bytes, 25 * 1024 * 1024);
        assert_eq!(config.log_root, PathBuf::from("/sdcard/FIRST/RoadRunner"));
        assert_eq!(config.dashboard.robot_radius, 9.0);
        assert_eq!(config.dashboard.resolution, 2.0);
    }

    #[test]
    fn test_save_and_load_telemetry_config() {
        let dir = TempDir::new().unwrap();
        let storage = create_test_storage(&dir);

        let mut config = TelemetryConfig::default();
        config.log_root = dir.path().join("logs");
        config.log_quota_bytes = 1024;
        config.dashboard.resolution = 0.5;

        let path = storage.save_telemetry_config(&config).unwrap();
        assert!(path.exists());

        let loaded = storage
            .get_telemetry_config()
            .expect("Config should exist")
            .expect("Config should load successfully");

        assert_eq!(loaded, config);

        let manager = loaded.log_quota_manager();
        assert_eq!(manager.quota_bytes(), 1024);
        assert_eq!(manager.root(), dir.path().join("logs"));
    }

    #[test]
    fn test_get_nonexistent_config() {
        let dir = TempDir::new().unwrap();
        let storage = create_test_storage(&dir);
        assert!(storage.get_telemetry_config().is_none());
        assert_eq!(
            storage.telemetry_config_or_default().unwrap(),
            TelemetryConfig::default()
        );
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let storage = create_test_storage(&dir);
        std::fs::create_dir_all(storage.root_path()).unwrap();
        std::fs::write(
            storage.telemetry_config_path(),
            r#"{"log_quota_bytes": 4096}"#,
        )
        .unwrap();

        let loaded = storage.telemetry_config_or_default().unwrap();
        assert_eq!(loaded.log_quota_bytes, 4096);
        assert_eq!(loaded.log_root, PathBuf::from(DEFAULT_LOG_ROOT));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let storage = create_test_storage(&dir);
        std::fs::create_dir_all(storage.root_path()).unwrap();
        std::fs::write(storage.telemetry_config_path(), "not json").unwrap();

        let result = storage.get_telemetry_config().expect("file exists");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_delete_telemetry_config() {
        let dir = TempDir::new().unwrap();
        let storage = create_test_storage(&dir);

        storage
            .save_telemetry_config(&TelemetryConfig::default())
            .unwrap();
        assert!(storage.get_telemetry_config().is_some());

        assert!(storage.delete_telemetry_config().unwrap());
        assert!(storage.get_telemetry_config().is_none());
        assert!(!storage.delete_telemetry_config().unwrap());
    }
}
