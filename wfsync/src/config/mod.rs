//! Configuration for wfsync.
//!
//! Two layers of configuration live here:
//!
//! - [`LayerConfig`]: the immutable workspace naming handed to the reader and
//!   the transaction builder.
//! - [`ConfigFile`]: the user's `~/.wfsync/config.ini`, from which a
//!   `LayerConfig` and the HTTP client settings are derived.
//!
//! # Example
//!
//! ```
//! use wfsync::config::{ConfigFile, LayerConfig};
//!
//! let config = ConfigFile::default();
//! let layer: LayerConfig = config.layer_config();
//! assert_eq!(layer.workspace(), "sdjzdx");
//! ```

mod defaults;
mod file;
mod layer;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    DEFAULT_BASE_URL, DEFAULT_GEOMETRY_FIELD, DEFAULT_LOG_FILE_NAME, DEFAULT_NAMESPACE_URI,
    DEFAULT_SERVER_TIMEOUT_SECS, DEFAULT_WORKSPACE,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use layer::LayerConfig;
pub use settings::{
    ConfigFile, LayerSettings, LoggingSettings, ServerSettings, TransactionSettings,
};
