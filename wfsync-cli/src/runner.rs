//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and service creation
//! to reduce duplication across command handlers.

use crate::error::CliError;
use std::path::{Path, PathBuf};
use tracing::info;
use wfsync::config::ConfigFile;
use wfsync::logging::{default_log_file, init_logging, LoggingGuard};
use wfsync::service::SyncService;
use wfsync::transport::AsyncReqwestClient;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Config file to load instead of `~/.wfsync/config.ini`
    /// * `verbose` - When true, enables debug-level logging unless RUST_LOG is set
    pub fn new(config_path: Option<&Path>, verbose: bool) -> Result<Self, CliError> {
        let config = load_config(config_path)?;

        let (log_dir, log_file) = split_log_path(&config.logging.file);
        let logging_guard = init_logging(&log_dir, &log_file, verbose)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("wfsync v{}", wfsync::VERSION);
        info!("wfsync CLI: {} command", command);
    }

    /// Create a sync service from the loaded configuration.
    pub fn create_service(&self) -> Result<SyncService<AsyncReqwestClient>, CliError> {
        let service = SyncService::from_config(&self.config).map_err(CliError::ClientCreation)?;
        info!("Service created successfully");
        Ok(service)
    }
}

/// Load the config file from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile, CliError> {
    let config = match path {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };
    Ok(config)
}

/// Split a configured log file path into directory and file name.
fn split_log_path(path: &Path) -> (PathBuf, String) {
    let log_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let log_file = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| default_log_file().to_string());
    (log_dir, log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_log_path() {
        let (dir, file) = split_log_path(Path::new("/var/log/wfsync/session.log"));
        assert_eq!(dir, PathBuf::from("/var/log/wfsync"));
        assert_eq!(file, "session.log");
    }

    #[test]
    fn test_split_bare_file_name() {
        let (dir, file) = split_log_path(Path::new("wfsync.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(file, "wfsync.log");
    }

    #[test]
    fn test_load_config_from_explicit_path() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.ini");
        std::fs::write(&path, "[layer]\nworkspace = city\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.layer.workspace, "city");
    }

    #[test]
    fn test_load_config_invalid_value() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.ini");
        std::fs::write(&path, "[server]\ntimeout = 0\n").unwrap();

        assert!(matches!(
            load_config(Some(&path)),
            Err(CliError::Config(_))
        ));
    }
}
