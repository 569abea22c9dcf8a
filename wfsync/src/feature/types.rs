//! GeoJSON feature type definitions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::id::normalize_feature_id;

/// Feature identifier as it appears in GeoJSON.
///
/// GeoJSON allows both strings and numbers. Identifiers read from the
/// server are strings of the form `<layer>.<localId>` until normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    Text(String),
    Number(serde_json::Number),
}

impl FeatureId {
    /// Returns the identifier with its layer prefix stripped.
    ///
    /// Numeric identifiers carry no prefix and are returned unchanged.
    pub fn normalized(&self) -> FeatureId {
        match self {
            FeatureId::Text(raw) => FeatureId::Text(normalize_feature_id(raw).to_string()),
            FeatureId::Number(_) => self.clone(),
        }
    }

    /// Returns the identifier as a string slice when it is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FeatureId::Text(s) => Some(s),
            FeatureId::Number(_) => None,
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureId::Text(s) => f.write_str(s),
            // Whole-number floats render without a fraction (7.0 -> "7")
            FeatureId::Number(n) => match n.as_f64() {
                Some(v) if n.is_f64() => write!(f, "{}", v),
                _ => write!(f, "{}", n),
            },
        }
    }
}

impl From<&str> for FeatureId {
    fn from(value: &str) -> Self {
        FeatureId::Text(value.to_string())
    }
}

impl From<String> for FeatureId {
    fn from(value: String) -> Self {
        FeatureId::Text(value)
    }
}

impl From<u64> for FeatureId {
    fn from(value: u64) -> Self {
        FeatureId::Number(value.into())
    }
}

impl From<i64> for FeatureId {
    fn from(value: i64) -> Self {
        FeatureId::Number(value.into())
    }
}

/// GeoJSON geometry types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

/// A GeoJSON geometry.
///
/// Coordinates are kept as raw JSON so that geometries this client cannot
/// edit still survive a read unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub geometry_type: GeometryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Value>,
    #[serde(flatten)]
    pub foreign_members: Map<String, Value>,
}

impl Geometry {
    /// Creates a Point geometry from a longitude/latitude pair.
    pub fn point(lng: f64, lat: f64) -> Self {
        Self {
            geometry_type: GeometryType::Point,
            coordinates: Some(Value::from(vec![lng, lat])),
            foreign_members: Map::new(),
        }
    }

    /// Returns true if this is a Point geometry.
    pub fn is_point(&self) -> bool {
        self.geometry_type == GeometryType::Point
    }

    /// Returns `(longitude, latitude)` for a Point with usable coordinates.
    ///
    /// Any extra ordinates (altitude) are ignored.
    pub fn point_coordinates(&self) -> Option<(f64, f64)> {
        if !self.is_point() {
            return None;
        }
        let coords = self.coordinates.as_ref()?.as_array()?;
        match coords.as_slice() {
            [lng, lat, ..] => Some((lng.as_f64()?, lat.as_f64()?)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureTag {
    #[default]
    Feature,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
enum CollectionTag {
    #[default]
    FeatureCollection,
}

/// A single GeoJSON feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: FeatureTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FeatureId>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    /// Members outside the GeoJSON core (`geometry_name`, `bbox`, ...)
    #[serde(flatten)]
    pub foreign_members: Map<String, Value>,
}

impl Feature {
    /// Creates a feature without an identifier.
    pub fn new(geometry: Option<Geometry>, properties: Option<Map<String, Value>>) -> Self {
        Self {
            kind: FeatureTag::Feature,
            id: None,
            geometry,
            properties,
            foreign_members: Map::new(),
        }
    }

    /// Creates a Point feature with the given properties.
    pub fn point(lng: f64, lat: f64, properties: Map<String, Value>) -> Self {
        Self::new(Some(Geometry::point(lng, lat)), Some(properties))
    }

    /// Sets the feature identifier.
    pub fn with_id(mut self, id: impl Into<FeatureId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns true if the feature has a Point geometry.
    pub fn is_point(&self) -> bool {
        self.geometry.as_ref().is_some_and(Geometry::is_point)
    }

    /// Returns the Point coordinates as `(longitude, latitude)`.
    pub fn point_coordinates(&self) -> Option<(f64, f64)> {
        self.geometry.as_ref()?.point_coordinates()
    }

    /// Looks up a property value. JSON `null` counts as absent.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties
            .as_ref()?
            .get(name)
            .filter(|value| !value.is_null())
    }

    /// Rewrites the identifier to its normalized form, if present.
    pub fn normalize_id(&mut self) {
        if let Some(id) = &self.id {
            self.id = Some(id.normalized());
        }
    }
}

/// A GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: CollectionTag,
    pub features: Vec<Feature>,
    /// Server metadata such as `totalFeatures`, `numberReturned` and `crs`
    #[serde(flatten)]
    pub foreign_members: Map<String, Value>,
}

impl FeatureCollection {
    /// Creates a collection from a list of features.
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: CollectionTag::FeatureCollection,
            features,
            foreign_members: Map::new(),
        }
    }

    /// Number of features in the collection.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if the collection has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Normalizes the identifier of every feature in the collection.
    pub fn normalize_ids(&mut self) {
        self.features.iter_mut().for_each(Feature::normalize_id);
    }
}

impl From<FeatureCollection> for Vec<Feature> {
    fn from(collection: FeatureCollection) -> Self {
        collection.features
    }
}
