//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use crate::wfs::MissingPropertyPolicy;
use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Feature server connection settings
    pub server: ServerSettings,
    /// Workspace naming settings
    pub layer: LayerSettings,
    /// Transaction building settings
    pub transaction: TransactionSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Feature server connection.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    /// Server base URL; the WFS endpoint is `<base_url>/wfs`
    pub base_url: String,
    /// Timeout in seconds for every HTTP request
    pub timeout: u64,
    /// Bearer credential attached to every request
    pub bearer_token: Option<String>,
}

/// Workspace naming.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSettings {
    /// Workspace name, used as the XML namespace prefix
    pub workspace: String,
    /// Namespace URI bound to the workspace
    pub namespace_uri: String,
    /// Geometry attribute name
    pub geometry_field: String,
}

/// Transaction building.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionSettings {
    /// How absent feature properties are rendered
    pub missing_property: MissingPropertyPolicy,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
