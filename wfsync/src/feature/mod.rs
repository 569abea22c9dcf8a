//! GeoJSON feature model
//!
//! Features arrive from the server as GeoJSON with `[longitude, latitude]`
//! coordinates and layer-qualified identifiers. This module holds the typed
//! model plus the identifier normalization that sits between the two worlds.

mod id;
mod types;

pub use id::{normalize_feature_id, qualify_feature_id, ID_SEPARATOR};
pub use types::{Feature, FeatureCollection, FeatureId, Geometry, GeometryType};

#[cfg(test)]
mod tests;
