//! High-level service facade for wfsync operations.
//!
//! [`SyncService`] wires the layer configuration and an HTTP client into the
//! feature reader, transaction builder and transaction submitter.
//!
//! # Example
//!
//! ```ignore
//! use wfsync::config::LayerConfig;
//! use wfsync::service::SyncService;
//! use wfsync::transport::AsyncReqwestClient;
//!
//! let layer = LayerConfig::default().with_base_url("https://gis.example.com/geoserver");
//! let service = SyncService::new(layer, AsyncReqwestClient::new()?);
//! let hydrants = service.read_features("fire_hydrants").await?;
//! ```

mod facade;

pub use facade::SyncService;

#[cfg(test)]
mod tests;
