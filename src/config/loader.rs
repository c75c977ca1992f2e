use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, PROMPT_PLACEHOLDER};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/colorpage/config.toml` on Linux, or the equivalent
    /// on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("colorpage").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Endpoint and model are set
    /// - The style template contains the `{prompt}` placeholder
    pub fn validate(&self) -> Result<(), ConfigError> {
        let generation = &self.generation;

        if generation.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "generation.endpoint must not be empty".to_string(),
            });
        }

        if generation.model.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "generation.model must not be empty".to_string(),
            });
        }

        if !generation.style_template.contains(PROMPT_PLACEHOLDER) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "generation.style_template must contain the {} placeholder",
                    PROMPT_PLACEHOLDER
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let mut config = Config::default();
        config.generation.style_template = "just a picture".to_string();

        match config.validate() {
            Err(ConfigError::ValidationError { message }) => {
                assert!(message.contains("{prompt}"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/colorpage/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
