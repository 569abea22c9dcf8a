//! Per-feature insert and update fragments.

use tracing::{debug, trace, warn};

use super::xml::XmlElement;
use super::{MissingPropertyPolicy, TransactionOperation};
use crate::config::LayerConfig;
use crate::feature::{qualify_feature_id, Feature};

/// Spatial reference written on inserted points.
pub const POINT_SRS_NAME: &str = "EPSG:4326";

/// Attribute elements written after the geometry of an inserted feature, in order.
pub const INSERT_ATTRIBUTES: [&str; 5] = [
    "Name",
    "currentStatus",
    "currentPressure",
    "managementUnit",
    "installationDate",
];

/// `(server property, feature property)` pairs written by updates, in order.
///
/// `managementUserNo` is fed from `installationDate`. Existing layers rely on
/// this mapping, so it is kept as-is until the intended source is confirmed.
pub const UPDATE_PROPERTIES: [(&str, &str); 6] = [
    ("Name", "Name"),
    ("currentStatus", "currentStatus"),
    ("currentPressure", "currentPressure"),
    ("managementUnit", "managementUnit"),
    ("installationDate", "installationDate"),
    ("managementUserNo", "installationDate"),
];

/// Builds the transaction fragment for one feature.
///
/// Every method returns `None` for features that cannot be written; callers
/// drop those silently.
#[derive(Debug, Clone, Copy)]
pub struct FragmentBuilder<'a> {
    layer: &'a LayerConfig,
    layer_name: &'a str,
    missing_property: MissingPropertyPolicy,
}

impl<'a> FragmentBuilder<'a> {
    /// Creates a fragment builder for one target layer.
    pub fn new(
        layer: &'a LayerConfig,
        layer_name: &'a str,
        missing_property: MissingPropertyPolicy,
    ) -> Self {
        Self {
            layer,
            layer_name,
            missing_property,
        }
    }

    /// Builds the fragment for `operation`. Delete never produces one.
    pub fn fragment(
        &self,
        operation: TransactionOperation,
        feature: &Feature,
    ) -> Option<XmlElement> {
        match operation {
            TransactionOperation::Insert => self.insert(feature),
            TransactionOperation::Update => self.update(feature),
            TransactionOperation::Delete => None,
        }
    }

    /// Builds a `wfs:Insert` fragment.
    ///
    /// Requires a Point geometry with coordinates. The coordinate text is
    /// `"<lng>,<lat>"`, longitude first as in GeoJSON.
    pub fn insert(&self, feature: &Feature) -> Option<XmlElement> {
        let (lng, lat) = feature.point_coordinates()?;
        trace!(lng = lng, lat = lat, "Building insert fragment");

        let point = XmlElement::new("gml:Point")
            .with_attribute("srsName", POINT_SRS_NAME)
            .with_child(XmlElement::new("gml:coordinates").with_text(format!("{},{}", lng, lat)));

        let geometry = XmlElement::new(self.layer.type_name(self.layer.geometry_field()))
            .with_child(point);

        let attributes = INSERT_ATTRIBUTES.iter().filter_map(|name| {
            self.missing_property
                .render(feature.property(name))
                .map(|text| XmlElement::new(self.layer.type_name(name)).with_text(text))
        });

        let record = XmlElement::new(self.layer.type_name(self.layer_name))
            .with_child(geometry)
            .with_children(attributes);

        Some(XmlElement::new("wfs:Insert").with_child(record))
    }

    /// Builds a `wfs:Update` fragment.
    ///
    /// Requires a Point geometry, an identifier to target and at least one
    /// mapped property to write.
    pub fn update(&self, feature: &Feature) -> Option<XmlElement> {
        if !feature.is_point() || feature.properties.is_none() {
            return None;
        }
        let Some(id) = &feature.id else {
            warn!(
                layer = self.layer_name,
                "Skipping update for feature without an id"
            );
            return None;
        };
        let fid = qualify_feature_id(self.layer_name, &id.to_string());
        trace!(fid = %fid, "Building update fragment");

        let properties: Vec<XmlElement> = UPDATE_PROPERTIES
            .iter()
            .filter_map(|(target, source)| {
                self.missing_property
                    .render(feature.property(source))
                    .map(|value| {
                        XmlElement::new("wfs:Property")
                            .with_child(XmlElement::new("wfs:Name").with_text(*target))
                            .with_child(XmlElement::new("wfs:Value").with_text(value))
                    })
            })
            .collect();
        if properties.is_empty() {
            debug!(fid = %fid, "Skipping update with no mapped properties");
            return None;
        }

        let filter = XmlElement::new("ogc:Filter")
            .with_child(XmlElement::new("ogc:FeatureId").with_attribute("fid", fid));

        Some(
            XmlElement::new("wfs:Update")
                .with_attribute("typeName", self.layer.type_name(self.layer_name))
                .with_children(properties)
                .with_child(filter),
        )
    }
}
