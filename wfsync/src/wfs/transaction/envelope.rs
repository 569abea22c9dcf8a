//! `wfs:Transaction` root element.

use super::xml::XmlElement;
use crate::config::LayerConfig;

/// WFS namespace URI.
pub const WFS_NAMESPACE: &str = "http://www.opengis.net/wfs";

/// GML namespace URI.
pub const GML_NAMESPACE: &str = "http://www.opengis.net/gml";

/// OGC filter namespace URI.
pub const OGC_NAMESPACE: &str = "http://www.opengis.net/ogc";

/// Protocol version of transaction documents.
pub const TRANSACTION_VERSION: &str = "1.0.0";

/// Wraps fragments in a `wfs:Transaction` element.
///
/// Declares the wfs, gml and ogc prefixes plus the workspace prefix bound to
/// the configured namespace URI. Fragment order is preserved.
pub fn transaction_envelope(
    layer: &LayerConfig,
    fragments: impl IntoIterator<Item = XmlElement>,
) -> XmlElement {
    XmlElement::new("wfs:Transaction")
        .with_attribute("service", "WFS")
        .with_attribute("version", TRANSACTION_VERSION)
        .with_attribute("xmlns:wfs", WFS_NAMESPACE)
        .with_attribute("xmlns:gml", GML_NAMESPACE)
        .with_attribute("xmlns:ogc", OGC_NAMESPACE)
        .with_attribute(
            format!("xmlns:{}", layer.workspace()),
            layer.namespace_uri(),
        )
        .with_children(fragments)
}
