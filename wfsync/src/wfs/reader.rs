//! Feature reader: GetFeature queries returning GeoJSON.

use tracing::{debug, info, trace, warn};

use super::error::ReadFailure;
use super::query::GetFeatureQuery;
use super::response::parse_exception_report;
use crate::config::LayerConfig;
use crate::feature::FeatureCollection;
use crate::transport::AsyncHttpClient;

/// Reads features of one layer from the feature server.
///
/// Holds no state between calls; reads are idempotent and may run
/// concurrently.
pub struct FeatureReader<'a, C: AsyncHttpClient> {
    layer: &'a LayerConfig,
    client: &'a C,
}

impl<'a, C: AsyncHttpClient> FeatureReader<'a, C> {
    /// Creates a reader for the configured workspace.
    pub fn new(layer: &'a LayerConfig, client: &'a C) -> Self {
        Self { layer, client }
    }

    /// Fetches every feature of `layer_name` with normalized identifiers.
    ///
    /// `layer_name` is forwarded as given. There is no retry and no partial
    /// result.
    ///
    /// # Errors
    ///
    /// - [`ReadFailure::InvalidEndpoint`] if the base URL is unusable
    /// - [`ReadFailure::Transport`] on network failure or non-success status
    /// - [`ReadFailure::ServiceException`] if the server returned an exception report
    /// - [`ReadFailure::InvalidResponse`] for any other undecodable body
    pub async fn read_features(&self, layer_name: &str) -> Result<FeatureCollection, ReadFailure> {
        let url = GetFeatureQuery::new(self.layer, layer_name).to_url()?;
        debug!(layer = layer_name, url = %url, "Reading features");

        let body = self.client.get(url.as_str()).await.map_err(|e| {
            warn!(layer = layer_name, error = %e, "Feature read failed");
            ReadFailure::from(e)
        })?;
        trace!(layer = layer_name, bytes = body.len(), "Feature response received");

        let mut collection = decode_collection(&body)?;
        collection.normalize_ids();

        info!(
            layer = layer_name,
            features = collection.len(),
            "Features loaded"
        );
        Ok(collection)
    }
}

fn decode_collection(body: &[u8]) -> Result<FeatureCollection, ReadFailure> {
    serde_json::from_slice(body).map_err(|e| {
        let text = String::from_utf8_lossy(body);
        match parse_exception_report(&text) {
            Some(message) => ReadFailure::ServiceException(message),
            None => ReadFailure::InvalidResponse(e.to_string()),
        }
    })
}
