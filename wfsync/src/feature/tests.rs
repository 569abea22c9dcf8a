//! Tests for the feature model and identifier handling

use super::*;
use serde_json::json;

#[test]
fn test_normalize_layer_qualified_id() {
    assert_eq!(normalize_feature_id("fire_hydrants.1"), "1");
    assert_eq!(normalize_feature_id("fire_hydrants.25"), "25");
}

#[test]
fn test_normalize_without_separator_is_identity() {
    assert_eq!(normalize_feature_id("17"), "17");
    assert_eq!(normalize_feature_id("abc"), "abc");
    assert_eq!(normalize_feature_id(""), "");
}

#[test]
fn test_normalize_keeps_everything_after_first_separator() {
    assert_eq!(normalize_feature_id("layer.a.b"), "a.b");
    assert_eq!(normalize_feature_id("layer."), "");
}

#[test]
fn test_qualify_feature_id() {
    assert_eq!(qualify_feature_id("fire_hydrants", "7"), "fire_hydrants.7");
}

#[test]
fn test_qualify_does_not_double_prefix() {
    assert_eq!(
        qualify_feature_id("fire_hydrants", "fire_hydrants.7"),
        "fire_hydrants.7"
    );
    // A different layer's prefix is just part of the local id
    assert_eq!(
        qualify_feature_id("fire_hydrants", "valves.7"),
        "fire_hydrants.valves.7"
    );
}

#[test]
fn test_normalize_then_qualify_round_trip() {
    let raw = "fire_hydrants.12";
    let local = normalize_feature_id(raw);
    assert_ne!(local, raw);
    assert_eq!(qualify_feature_id("fire_hydrants", local), raw);
}

#[test]
fn test_feature_id_normalized_leaves_numbers() {
    let id = FeatureId::from(5u64);
    assert_eq!(id.normalized(), FeatureId::from(5u64));

    let id = FeatureId::from("fire_hydrants.5");
    assert_eq!(id.normalized(), FeatureId::from("5"));
}

#[test]
fn test_feature_id_deserializes_string_and_number() {
    let text: FeatureId = serde_json::from_value(json!("fire_hydrants.3")).unwrap();
    assert_eq!(text, FeatureId::Text("fire_hydrants.3".to_string()));

    let number: FeatureId = serde_json::from_value(json!(3)).unwrap();
    assert_eq!(number.to_string(), "3");
    assert!(number.as_str().is_none());
}

#[test]
fn test_whole_float_id_renders_as_integer() {
    let id: FeatureId = serde_json::from_str("7.0").unwrap();
    assert_eq!(id.to_string(), "7");
    assert_eq!(
        qualify_feature_id("fire_hydrants", &id.to_string()),
        "fire_hydrants.7"
    );

    let fractional: FeatureId = serde_json::from_str("7.5").unwrap();
    assert_eq!(fractional.to_string(), "7.5");
}

#[test]
fn test_point_coordinates_longitude_first() {
    let feature: Feature = serde_json::from_value(json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [116.397, 39.908] },
        "properties": {}
    }))
    .unwrap();

    assert!(feature.is_point());
    assert_eq!(feature.point_coordinates(), Some((116.397, 39.908)));
}

#[test]
fn test_point_coordinates_ignore_altitude() {
    let geometry = Geometry {
        geometry_type: GeometryType::Point,
        coordinates: Some(json!([-3.5, 40.25, 650.0])),
        foreign_members: Default::default(),
    };
    assert_eq!(geometry.point_coordinates(), Some((-3.5, 40.25)));
}

#[test]
fn test_point_coordinates_missing_or_malformed() {
    let mut geometry = Geometry::point(1.0, 2.0);
    geometry.coordinates = None;
    assert_eq!(geometry.point_coordinates(), None);

    geometry.coordinates = Some(json!([1.0]));
    assert_eq!(geometry.point_coordinates(), None);

    geometry.coordinates = Some(json!(["a", "b"]));
    assert_eq!(geometry.point_coordinates(), None);
}

#[test]
fn test_non_point_geometry_has_no_point_coordinates() {
    let feature: Feature = serde_json::from_value(json!({
        "type": "Feature",
        "geometry": { "type": "LineString", "coordinates": [[0, 0], [1, 1]] },
        "properties": null
    }))
    .unwrap();

    assert!(!feature.is_point());
    assert_eq!(feature.point_coordinates(), None);
    assert!(feature.properties.is_none());
}

#[test]
fn test_feature_without_geometry() {
    let feature: Feature = serde_json::from_value(json!({
        "type": "Feature",
        "geometry": null,
        "properties": { "Name": "H-1" }
    }))
    .unwrap();

    assert!(!feature.is_point());
    assert_eq!(feature.property("Name"), Some(&json!("H-1")));
}

#[test]
fn test_null_property_counts_as_absent() {
    let feature = Feature::point(
        0.0,
        0.0,
        json!({ "Name": null, "currentStatus": "ok" })
            .as_object()
            .cloned()
            .unwrap(),
    );

    assert_eq!(feature.property("Name"), None);
    assert_eq!(feature.property("managementUnit"), None);
    assert_eq!(feature.property("currentStatus"), Some(&json!("ok")));
}

#[test]
fn test_collection_normalizes_ids() {
    let mut collection: FeatureCollection = serde_json::from_value(json!({
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "id": "fire_hydrants.1",
              "geometry": { "type": "Point", "coordinates": [1, 2] }, "properties": {} },
            { "type": "Feature", "id": "fire_hydrants.2",
              "geometry": { "type": "Point", "coordinates": [3, 4] }, "properties": {} },
            { "type": "Feature",
              "geometry": { "type": "Point", "coordinates": [5, 6] }, "properties": {} }
        ],
        "totalFeatures": 3
    }))
    .unwrap();

    collection.normalize_ids();

    let ids: Vec<Option<String>> = collection
        .features
        .iter()
        .map(|f| f.id.as_ref().map(|id| id.to_string()))
        .collect();
    assert_eq!(
        ids,
        vec![Some("1".to_string()), Some("2".to_string()), None]
    );
}

#[test]
fn test_collection_preserves_foreign_members() {
    let value = json!({
        "type": "FeatureCollection",
        "features": [],
        "totalFeatures": 0,
        "crs": { "type": "name", "properties": { "name": "urn:ogc:def:crs:EPSG::4326" } }
    });

    let collection: FeatureCollection = serde_json::from_value(value.clone()).unwrap();
    assert!(collection.is_empty());
    assert_eq!(collection.foreign_members.get("totalFeatures"), Some(&json!(0)));

    let round_trip = serde_json::to_value(&collection).unwrap();
    assert_eq!(round_trip, value);
}

#[test]
fn test_feature_cannot_deserialize_as_collection() {
    let result: Result<FeatureCollection, _> = serde_json::from_value(json!({
        "type": "Feature",
        "geometry": null,
        "properties": null
    }));
    assert!(result.is_err());
}
