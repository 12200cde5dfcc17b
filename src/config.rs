use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(PathBuf),

    #[error("failed to read or write config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("animation duration must be positive, got {0}")]
    InvalidDuration(f32),
}

/// Helper function for the default log filter
fn default_filter() -> String {
    "info".to_string()
}

/// Helper function for the default transition duration
fn default_duration() -> f32 {
    0.25
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Tracing filter directive, overridable via RUST_LOG
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Default duration for feature transitions, in seconds
    #[serde(default = "default_duration")]
    pub default_duration: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            default_duration: default_duration(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeaturesConfig {
    /// List of feature IDs to enable
    #[serde(default)]
    pub enabled: Vec<String>,

    /// Per-feature configuration (feature ID -> config values)
    #[serde(default)]
    pub settings: HashMap<String, toml::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub features: FeaturesConfig,
}

impl Config {
    pub fn config_path() -> PathBuf {
        use directories::ProjectDirs;
        let proj_dirs =
            ProjectDirs::from("", "", "crescent").expect("Failed to determine config directory");
        proj_dirs.config_dir().join("config.toml")
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Reject values that would violate caller contracts downstream, at
    /// load time rather than at first use
    fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.default_duration <= 0.0 {
            return Err(ConfigError::InvalidDuration(
                self.animation.default_duration,
            ));
        }

        Ok(())
    }

    /// Whether the named feature is enabled
    pub fn feature_enabled(&self, id: &str) -> bool {
        self.features.enabled.iter().any(|f| f == id)
    }

    /// Settings table for the named feature, if present
    pub fn feature_settings(&self, id: &str) -> Option<&toml::Value> {
        self.features.settings.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.animation.default_duration, 0.25);
        assert!(config.features.enabled.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.logging.filter = "debug".to_string();
        config.animation.default_duration = 0.5;
        config.features.enabled.push("watermark".to_string());

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();

        assert_eq!(loaded.logging.filter, "debug");
        assert_eq!(loaded.animation.default_duration, 0.5);
        assert!(loaded.feature_enabled("watermark"));
        assert!(!loaded.feature_enabled("radar"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        assert!(matches!(Config::load(&path), Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_non_positive_duration_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[animation]\ndefault_duration = 0.0\n").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_feature_settings_are_free_form() {
        let config: Config = toml::from_str(
            r#"
            [features]
            enabled = ["watermark"]

            [features.settings.watermark]
            corner = "top-right"
            fade = 0.1
            "#,
        )
        .unwrap();

        let settings = config.feature_settings("watermark").unwrap();
        assert_eq!(
            settings.get("corner").and_then(|v| v.as_str()),
            Some("top-right")
        );
        assert!(config.feature_settings("radar").is_none());
    }
}
