//! Configuration file handling for ~/.wfsync/config.ini.
//!
//! Loads and saves user configuration with sensible defaults.
//! Settings structs live in [`super::settings`], constants in [`super::defaults`],
//! parsing in [`super::parser`], and serialization in [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::layer::LayerConfig;
use super::settings::ConfigFile;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.wfsync/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        let path = config_file_path();
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to the default path (~/.wfsync/config.ini).
    pub fn save(&self) -> Result<(), ConfigFileError> {
        let path = config_file_path();
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        std::fs::write(path, self.to_ini_string())
            .map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Render the configuration as commented INI text, as written by [`save_to`].
    ///
    /// [`save_to`]: ConfigFile::save_to
    pub fn to_ini_string(&self) -> String {
        super::writer::to_config_string(self)
    }

    /// Create the default config file if it doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
        }
        Ok(path)
    }

    /// Build the layer naming configuration from the loaded settings.
    pub fn layer_config(&self) -> LayerConfig {
        LayerConfig::new()
            .with_base_url(self.server.base_url.as_str())
            .with_workspace(self.layer.workspace.as_str())
            .with_namespace_uri(self.layer.namespace_uri.as_str())
            .with_geometry_field(self.layer.geometry_field.as_str())
    }
}

/// Get the path to the config directory (~/.wfsync).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".wfsync")
}

/// Get the path to the config file (~/.wfsync/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;
    use crate::wfs::MissingPropertyPolicy;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.server.timeout, DEFAULT_SERVER_TIMEOUT_SECS);
        assert!(config.server.bearer_token.is_none());
        assert_eq!(config.layer.workspace, DEFAULT_WORKSPACE);
        assert_eq!(
            config.transaction.missing_property,
            MissingPropertyPolicy::Omit
        );
        assert!(config.logging.file.ends_with(DEFAULT_LOG_FILE_NAME));
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        let config = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.server.base_url = "https://gis.example.com/geoserver".to_string();
        config.server.bearer_token = Some("token-123".to_string());
        config.layer.workspace = "city".to_string();
        config.transaction.missing_property = MissingPropertyPolicy::Empty;
        config.logging.file = temp_dir.path().join("logs").join("wfsync.log");

        config.save_to(&config_path).unwrap();
        let loaded = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_invalid_value_fails() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, "[server]\ntimeout = -1\n").unwrap();

        let err = ConfigFile::load_from(&config_path).unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { .. }));
    }

    #[test]
    fn test_layer_config_from_settings() {
        let mut config = ConfigFile::default();
        config.server.base_url = "http://gis.local/geoserver".to_string();
        config.layer.workspace = "city".to_string();
        config.layer.namespace_uri = "http://gis.local/city".to_string();
        config.layer.geometry_field = "the_geom".to_string();

        let layer = config.layer_config();
        assert_eq!(layer.endpoint(), "http://gis.local/geoserver/wfs");
        assert_eq!(layer.workspace(), "city");
        assert_eq!(layer.namespace_uri(), "http://gis.local/city");
        assert_eq!(layer.geometry_field(), "the_geom");
    }

    #[test]
    fn test_config_file_path() {
        assert!(config_file_path().ends_with(".wfsync/config.ini"));
    }
}
