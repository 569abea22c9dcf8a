//! Feature server / layer naming configuration.

use super::defaults::{
    DEFAULT_BASE_URL, DEFAULT_GEOMETRY_FIELD, DEFAULT_NAMESPACE_URI, DEFAULT_WORKSPACE,
};

/// Path of the WFS endpoint below the server base URL.
const WFS_PATH: &str = "wfs";

/// Fixed naming configuration for one feature server workspace.
///
/// Injected into the reader and the transaction builder; never mutated
/// after construction.
///
/// # Example
///
/// ```
/// use wfsync::config::LayerConfig;
///
/// let config = LayerConfig::new()
///     .with_base_url("https://gis.example.com/geoserver/")
///     .with_workspace("city");
///
/// assert_eq!(config.endpoint(), "https://gis.example.com/geoserver/wfs");
/// assert_eq!(config.type_name("fire_hydrants"), "city:fire_hydrants");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerConfig {
    /// Server base URL, e.g. `http://localhost:8085/geoserver`
    base_url: String,
    /// Workspace name, also the XML namespace prefix
    workspace: String,
    /// Namespace URI bound to the workspace prefix
    namespace_uri: String,
    /// Name of the geometry attribute on the feature type
    geometry_field: String,
}

impl LayerConfig {
    /// Create a layer configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server base URL. Trailing slashes are ignored.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the workspace name (XML namespace prefix).
    pub fn with_workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = workspace.into();
        self
    }

    /// Set the namespace URI bound to the workspace.
    pub fn with_namespace_uri(mut self, namespace_uri: impl Into<String>) -> Self {
        self.namespace_uri = namespace_uri.into();
        self
    }

    /// Set the geometry attribute name.
    pub fn with_geometry_field(mut self, geometry_field: impl Into<String>) -> Self {
        self.geometry_field = geometry_field.into();
        self
    }

    /// Get the server base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the workspace name.
    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    /// Get the namespace URI.
    pub fn namespace_uri(&self) -> &str {
        &self.namespace_uri
    }

    /// Get the geometry attribute name.
    pub fn geometry_field(&self) -> &str {
        &self.geometry_field
    }

    /// URL of the WFS endpoint used for both reads and transactions.
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, WFS_PATH)
    }

    /// Workspace-qualified name: `<workspace>:<name>`.
    ///
    /// Used for feature type names and for attribute elements in inserts.
    pub fn type_name(&self, name: &str) -> String {
        format!("{}:{}", self.workspace, name)
    }
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            workspace: DEFAULT_WORKSPACE.to_string(),
            namespace_uri: DEFAULT_NAMESPACE_URI.to_string(),
            geometry_field: DEFAULT_GEOMETRY_FIELD.to_string(),
        }
    }
}
