use std::path::Path;

use crate::error::ConfigError;
use crate::game::{GameConfig, MAX_DIMENSION};
use crate::ui::UiConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.width == 0 || self.game.width > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "game.width must be in [1, {MAX_DIMENSION}]"
            )));
        }
        if self.game.height == 0 || self.game.height > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "game.height must be in [1, {MAX_DIMENSION}]"
            )));
        }
        if let Some(log_file) = &self.ui.log_file {
            if log_file.as_os_str().is_empty() {
                return Err(ConfigError::Validation(
                    "ui.log_file must not be empty".into(),
                ));
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
