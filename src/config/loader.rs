//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! reconciliation configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ReconciliationConfig;

/// The file read from a configuration directory.
pub const CONFIG_FILE_NAME: &str = "reconciliation.yaml";

/// Loads and provides access to the reconciliation configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── reconciliation.yaml   # Matching window, thresholds, display formats
/// ```
///
/// # Example
///
/// ```no_run
/// use exit_compliance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Warning after {} min", loader.config().thresholds.warning_minutes);
/// # Ok::<(), exit_compliance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ReconciliationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `reconciliation.yaml` is missing
    /// - The file contains invalid YAML
    /// - A value fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let path_str = config_path.display().to_string();

        let content = fs::read_to_string(&config_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: ReconciliationConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Wraps an in-memory configuration after validating it.
    pub fn from_config(config: ReconciliationConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ReconciliationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn write_temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("exit_compliance_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE_NAME), content).unwrap();
        dir
    }

    #[test]
    fn test_load_shipped_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config(), &ReconciliationConfig::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains(CONFIG_FILE_NAME));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = write_temp_config("bad_yaml", "matching: [unclosed");

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains(CONFIG_FILE_NAME));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = write_temp_config(
            "inverted",
            "thresholds:\n  warning_minutes: 70\n  violation_minutes: 60\n",
        );

        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_load_overrides() {
        let dir = write_temp_config("override", "matching:\n  window_minutes: 45\n");

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.config().matching.window_minutes, 45);
        assert!(loader.config().matching.trim_extremes);
    }

    #[test]
    fn test_default_loader_is_valid() {
        let loader = ConfigLoader::default();
        assert!(loader.config().validate().is_ok());
    }
}
