use crate::domain::IdSpaceConfig;
use crate::ports::ConfigProvider;

// ============================================================================
// StaticConfigProvider - Hardcoded config for testing/development
// ============================================================================

/// Static configuration provider with hardcoded values.
///
/// Useful for testing and development. For deployments, use `TomlConfigProvider`.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    config: IdSpaceConfig,
}

impl StaticConfigProvider {
    /// Create with the default 128-bit id space.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with specified id-space config.
    #[must_use]
    pub fn with_config(mut self, config: IdSpaceConfig) -> Self {
        self.config = config;
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn id_space_config(&self) -> IdSpaceConfig {
        self.config
    }
}

// ============================================================================
// TomlConfigProvider - Config file loading (requires "toml-config" feature)
// ============================================================================

#[cfg(feature = "toml-config")]
mod toml_config {
    use super::*;
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;
    use thiserror::Error;
    use tracing::info;

    /// Configuration file structure.
    #[derive(Debug, Deserialize)]
    struct ConfigFile {
        #[serde(default)]
        id_space: IdSpaceConfigFile,
    }

    #[derive(Debug, Deserialize, Default)]
    struct IdSpaceConfigFile {
        min_bytes: Option<usize>,
    }

    /// TOML-based configuration provider.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// [id_space]
    /// min_bytes = 16
    /// ```
    #[derive(Debug, Clone)]
    pub struct TomlConfigProvider {
        config: IdSpaceConfig,
    }

    impl TomlConfigProvider {
        /// Load configuration from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if the file cannot be read, parsed, or validated.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
                path: path.as_ref().display().to_string(),
                error: e.to_string(),
            })?;

            Self::parse(&content)
        }

        /// Parse configuration from a TOML string.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

            let defaults = IdSpaceConfig::default();
            let config = IdSpaceConfig {
                min_bytes: file.id_space.min_bytes.unwrap_or(defaults.min_bytes),
            };
            config
                .validate()
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;

            info!(min_bytes = config.min_bytes, "Loaded id space config");
            Ok(Self { config })
        }
    }

    impl ConfigProvider for TomlConfigProvider {
        fn id_space_config(&self) -> IdSpaceConfig {
            self.config
        }
    }

    /// Configuration loading errors.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum ConfigError {
        /// File I/O error.
        #[error("failed to read config file {path}: {error}")]
        Io { path: String, error: String },
        /// TOML parse error.
        #[error("failed to parse config: {0}")]
        Parse(String),
        /// Parsed values are out of range.
        #[error("invalid config: {0}")]
        Invalid(String),
    }

}

#[cfg(feature = "toml-config")]
pub use toml_config::{ConfigError, TomlConfigProvider};
