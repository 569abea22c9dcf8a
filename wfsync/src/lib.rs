//! wfsync - WFS feature reading and WFS-T transaction client
//!
//! This library keeps a client-side feature collection in sync with an
//! OGC Web Feature Service (GeoServer-style) endpoint: it reads a layer as
//! GeoJSON and writes edits back as WFS-T transactions.
//!
//! # High-Level API
//!
//! For most use cases, the [`service`] module provides a simplified facade:
//!
//! ```ignore
//! use wfsync::config::ConfigFile;
//! use wfsync::service::SyncService;
//! use wfsync::wfs::TransactionOperation;
//!
//! let config = ConfigFile::load()?;
//! let service = SyncService::from_config(&config)?;
//!
//! let mut hydrants = service.read_features("fire_hydrants").await?;
//! // ... edit hydrants.features ...
//! let ack = service
//!     .edit_features(&hydrants.features, TransactionOperation::Update, "fire_hydrants")
//!     .await?;
//! ```

pub mod config;
pub mod feature;
pub mod logging;
pub mod service;
pub mod transport;
pub mod wfs;

/// Version of the wfsync library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_not_empty() {
        assert!(!VERSION.is_empty());
    }
}
