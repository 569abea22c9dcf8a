use super::*;
use crate::config::{ConfigFile, LayerConfig};
use crate::feature::{Feature, FeatureId};
use crate::transport::{HttpError, MockAsyncHttpClient};
use crate::wfs::{
    BuildFailure, MissingPropertyPolicy, SubmitFailure, SyncError, TransactionOperation,
};
use serde_json::{json, Map, Value};

const UPDATE_ACK: &str = r#"<wfs:WFS_TransactionResponse xmlns:wfs="http://www.opengis.net/wfs">
  <wfs:InsertResult><ogc:FeatureId fid="none"/></wfs:InsertResult>
  <wfs:TransactionResult><wfs:Status><wfs:SUCCESS/></wfs:Status></wfs:TransactionResult>
</wfs:WFS_TransactionResponse>"#;

fn props(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

fn hydrant(id: &str) -> Feature {
    Feature::point(
        117.1,
        36.6,
        props(json!({
            "Name": "H-7",
            "currentStatus": "ok",
            "currentPressure": 0.4,
            "managementUnit": "Unit A",
            "installationDate": "2020-05-01"
        })),
    )
    .with_id(id)
}

#[tokio::test]
async fn test_edit_features_builds_and_submits() {
    let client = MockAsyncHttpClient::ok(UPDATE_ACK);
    let service = SyncService::new(LayerConfig::default(), client.clone());

    let ack = service
        .edit_features(&[hydrant("7")], TransactionOperation::Update, "fire_hydrants")
        .await
        .unwrap();

    assert!(ack.inserted_ids.is_empty());

    let requests = client.recorded();
    assert_eq!(requests.len(), 1);
    let body = requests[0].body.as_deref().unwrap();
    assert!(body.contains(r#"<ogc:FeatureId fid="fire_hydrants.7"/>"#));
    assert!(body.contains(r#"typeName="sdjzdx:fire_hydrants""#));
}

#[tokio::test]
async fn test_build_failure_sends_nothing() {
    let client = MockAsyncHttpClient::ok(UPDATE_ACK);
    let service = SyncService::new(LayerConfig::default(), client.clone());

    let err = service
        .edit_features(&[hydrant("7")], TransactionOperation::Delete, "fire_hydrants")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        SyncError::Build(BuildFailure::NothingToSubmit {
            operation: TransactionOperation::Delete,
            dropped: 1,
        })
    );
    assert!(client.recorded().is_empty());
}

#[tokio::test]
async fn test_empty_batch_sends_nothing() {
    let client = MockAsyncHttpClient::ok(UPDATE_ACK);
    let service = SyncService::new(LayerConfig::default(), client.clone());

    let err = service
        .edit_features(&[], TransactionOperation::Insert, "fire_hydrants")
        .await
        .unwrap_err();

    assert_eq!(err, SyncError::Build(BuildFailure::EmptyInput));
    assert!(client.recorded().is_empty());
}

#[tokio::test]
async fn test_submit_failure_is_wrapped() {
    let client = MockAsyncHttpClient::err(HttpError::from_status(401, "http://gis/wfs"));
    let service = SyncService::new(LayerConfig::default(), client);

    let err = service
        .edit_features(&[hydrant("7")], TransactionOperation::Update, "fire_hydrants")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SyncError::Submit(SubmitFailure::Transport(HttpError::Unauthorized { .. }))
    ));
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_read_features_uses_layer_config() {
    let client = MockAsyncHttpClient::ok(
        r#"{"type":"FeatureCollection","features":[{"type":"Feature","id":"poles.3","geometry":null,"properties":{}}]}"#,
    );
    let layer = LayerConfig::default()
        .with_base_url("https://gis.example.com/geoserver")
        .with_workspace("city");
    let service = SyncService::new(layer, client.clone());

    let collection = service.read_features("poles").await.unwrap();

    assert_eq!(collection.features[0].id, Some(FeatureId::from("3")));
    let url = &client.recorded()[0].url;
    assert!(url.starts_with("https://gis.example.com/geoserver/wfs?"));
    assert!(url.contains("typeName=city%3Apoles"));
}

#[test]
fn test_missing_property_policy_reaches_builder() {
    let service = SyncService::new(LayerConfig::default(), MockAsyncHttpClient::ok(""))
        .with_missing_property_policy(MissingPropertyPolicy::Undefined);
    let feature = Feature::point(1.0, 2.0, Map::new());

    let document = service
        .build_transaction(&[feature], TransactionOperation::Insert, "fire_hydrants")
        .unwrap();

    assert_eq!(
        service.missing_property_policy(),
        MissingPropertyPolicy::Undefined
    );
    assert!(document
        .as_xml()
        .contains("<sdjzdx:Name>undefined</sdjzdx:Name>"));
}

#[test]
fn test_from_config() {
    let mut config = ConfigFile::default();
    config.server.base_url = "https://gis.example.com/geoserver".to_string();
    config.server.bearer_token = Some("secret".to_string());
    config.transaction.missing_property = MissingPropertyPolicy::Empty;

    let service = SyncService::from_config(&config).unwrap();

    assert_eq!(service.layer().endpoint(), "https://gis.example.com/geoserver/wfs");
    assert!(service.client().has_bearer_token());
    assert_eq!(service.missing_property_policy(), MissingPropertyPolicy::Empty);
}
