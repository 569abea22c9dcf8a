//! Common types and utilities shared across CLI commands.

use std::fs;
use std::path::Path;

use serde_json::Value;
use wfsync::feature::{Feature, FeatureCollection};

use crate::error::CliError;

/// Load features from a GeoJSON file.
///
/// Accepts a FeatureCollection or a single Feature.
pub fn load_features(path: &Path) -> Result<Vec<Feature>, CliError> {
    let text = fs::read_to_string(path).map_err(|error| CliError::FileRead {
        path: path.display().to_string(),
        error,
    })?;

    parse_features(&text).map_err(|reason| CliError::InvalidInput {
        path: path.display().to_string(),
        reason,
    })
}

/// Parse GeoJSON text into features.
pub fn parse_features(text: &str) -> Result<Vec<Feature>, String> {
    let value: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;

    match value.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => serde_json::from_value::<FeatureCollection>(value)
            .map(Vec::from)
            .map_err(|e| e.to_string()),
        Some("Feature") => serde_json::from_value::<Feature>(value)
            .map(|feature| vec![feature])
            .map_err(|e| e.to_string()),
        Some(other) => Err(format!(
            "expected a Feature or FeatureCollection, found '{}'",
            other
        )),
        None => Err("expected a Feature or FeatureCollection".to_string()),
    }
}

/// Write `text` to `path`, or print it to stdout when no path is given.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, text).map_err(|error| CliError::FileWrite {
            path: path.display().to_string(),
            error,
        }),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wfsync::feature::FeatureId;

    #[test]
    fn test_parse_collection() {
        let features = parse_features(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","id":"7","geometry":{"type":"Point","coordinates":[1,2]},"properties":{}},
                {"type":"Feature","geometry":null,"properties":null}
            ]}"#,
        )
        .unwrap();

        assert_eq!(features.len(), 2);
        assert_eq!(features[0].id, Some(FeatureId::from("7")));
    }

    #[test]
    fn test_parse_single_feature() {
        let features = parse_features(
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":{"Name":"H-1"}}"#,
        )
        .unwrap();

        assert_eq!(features.len(), 1);
        assert_eq!(features[0].point_coordinates(), Some((1.0, 2.0)));
    }

    #[test]
    fn test_parse_rejects_bare_geometry() {
        let err = parse_features(r#"{"type":"Point","coordinates":[1,2]}"#).unwrap_err();
        assert!(err.contains("found 'Point'"));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse_features("{").is_err());
        assert!(parse_features("[]").is_err());
    }

    #[test]
    fn test_load_features_missing_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let err = load_features(&temp_dir.path().join("missing.geojson")).unwrap_err();
        assert!(matches!(err, CliError::FileRead { .. }));
    }

    #[test]
    fn test_write_output_to_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");

        write_output(Some(&path), "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
