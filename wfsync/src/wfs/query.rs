//! GetFeature read query.

use reqwest::Url;

use super::error::ReadFailure;
use crate::config::LayerConfig;

/// Service name sent with every read.
pub const WFS_SERVICE: &str = "WFS";

/// Protocol version used for reads.
pub const READ_VERSION: &str = "1.1.0";

/// Read operation name.
pub const GET_FEATURE: &str = "GetFeature";

/// Output encoding requested for reads.
pub const GEOJSON_OUTPUT_FORMAT: &str = "application/json";

/// Output coordinate reference system for reads (lon/lat in GeoJSON).
pub const WGS84_SRS_NAME: &str = "urn:ogc:def:crs:EPSG::4326";

/// A GetFeature query for one layer of the configured workspace.
#[derive(Debug, Clone)]
pub struct GetFeatureQuery<'a> {
    layer: &'a LayerConfig,
    layer_name: &'a str,
}

impl<'a> GetFeatureQuery<'a> {
    /// Creates a query for `layer_name`. The name is not validated.
    pub fn new(layer: &'a LayerConfig, layer_name: &'a str) -> Self {
        Self { layer, layer_name }
    }

    /// Fully-qualified type name, `<workspace>:<layer>`.
    pub fn type_name(&self) -> String {
        self.layer.type_name(self.layer_name)
    }

    /// Query parameters in the order they are sent.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("service", WFS_SERVICE.to_string()),
            ("version", READ_VERSION.to_string()),
            ("request", GET_FEATURE.to_string()),
            ("typeName", self.type_name()),
            ("outputFormat", GEOJSON_OUTPUT_FORMAT.to_string()),
            ("srsName", WGS84_SRS_NAME.to_string()),
        ]
    }

    /// Builds the request URL against the configured endpoint.
    pub fn to_url(&self) -> Result<Url, ReadFailure> {
        let endpoint = self.layer.endpoint();
        Url::parse_with_params(&endpoint, self.params()).map_err(|e| {
            ReadFailure::InvalidEndpoint {
                endpoint,
                message: e.to_string(),
            }
        })
    }
}
