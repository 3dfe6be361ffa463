//! Application settings and paths.
//!
//! Settings live in a JSON file under the XDG config directory.

use crate::error::{ConfigError, ConfigResult};
use crate::types::ProbeTimeout;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory paths following the XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/portprobe)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Locate the per-user directories. Nothing is created on disk.
    pub fn new() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "portprobe", "portprobe")
            .ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Default per-probe timeout in milliseconds, -1 for none.
    pub default_timeout_ms: i64,
    /// Ports probed when a bare host is given.
    pub default_ports: String,
    /// Default output format.
    pub default_output_format: String,
    /// Enable verbose logging by default.
    pub verbose: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_timeout_ms: 3000,
            default_ports: "1-1024".to_string(),
            default_output_format: "plain".to_string(),
            verbose: false,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, or defaults if there is no file.
    pub fn load() -> ConfigResult<Self> {
        let file = Paths::new()?.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// The configured default timeout.
    pub fn timeout(&self) -> ConfigResult<ProbeTimeout> {
        ProbeTimeout::from_millis(self.default_timeout_ms)
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.default_timeout_ms, 3000);
        assert_eq!(settings.default_ports, "1-1024");
        assert_eq!(
            settings.timeout().unwrap().duration(),
            Some(Duration::from_secs(3))
        );
    }

    #[test]
    fn test_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.json");

        let settings = AppSettings {
            default_timeout_ms: -1,
            default_ports: "22,80".to_string(),
            ..AppSettings::default()
        };
        fs::write(&file, serde_json::to_string_pretty(&settings).unwrap()).unwrap();

        let loaded = AppSettings::load_from(&file).unwrap();
        assert_eq!(loaded, settings);
        assert!(loaded.timeout().unwrap().is_indefinite());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.json");
        fs::write(&file, r#"{ "default_ports": "443" }"#).unwrap();

        let loaded = AppSettings::load_from(&file).unwrap();
        assert_eq!(loaded.default_ports, "443");
        assert_eq!(loaded.default_timeout_ms, 3000);
    }

    #[test]
    fn test_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.json");
        fs::write(&file, "not json").unwrap();
        assert!(matches!(
            AppSettings::load_from(&file),
            Err(ConfigError::InvalidFormat(_))
        ));

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            AppSettings::load_from(&missing),
            Err(ConfigError::ReadFailed { .. })
        ));
    }

    #[test]
    fn test_invalid_timeout_setting() {
        let settings = AppSettings {
            default_timeout_ms: -7,
            ..AppSettings::default()
        };
        assert!(settings.timeout().is_err());
    }
}
