//! Default values and constants for all configuration settings.

use std::path::PathBuf;

use super::settings::*;
use crate::transport::DEFAULT_TIMEOUT_SECS;
use crate::wfs::MissingPropertyPolicy;

/// Default feature server base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8085/geoserver";

/// Default workspace name.
pub const DEFAULT_WORKSPACE: &str = "sdjzdx";

/// Default namespace URI for the default workspace.
pub const DEFAULT_NAMESPACE_URI: &str = "http://localhost:8085/geoserver/sdjzdx";

/// Default geometry attribute name.
pub const DEFAULT_GEOMETRY_FIELD: &str = "geom";

/// Default HTTP timeout in seconds.
pub const DEFAULT_SERVER_TIMEOUT_SECS: u64 = DEFAULT_TIMEOUT_SECS;

/// Default log file name.
pub const DEFAULT_LOG_FILE_NAME: &str = "wfsync.log";

impl Default for ConfigFile {
    fn default() -> Self {
        let config_dir = super::file::config_directory();

        Self {
            server: ServerSettings {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout: DEFAULT_SERVER_TIMEOUT_SECS,
                bearer_token: None,
            },
            layer: LayerSettings {
                workspace: DEFAULT_WORKSPACE.to_string(),
                namespace_uri: DEFAULT_NAMESPACE_URI.to_string(),
                geometry_field: DEFAULT_GEOMETRY_FIELD.to_string(),
            },
            transaction: TransactionSettings {
                missing_property: MissingPropertyPolicy::default(),
            },
            logging: LoggingSettings {
                file: default_log_path(&config_dir),
            },
        }
    }
}

fn default_log_path(config_dir: &std::path::Path) -> PathBuf {
    config_dir.join("logs").join(DEFAULT_LOG_FILE_NAME)
}
