//! Sync service facade implementation.

use tracing::info;

use crate::config::{ConfigFile, LayerConfig};
use crate::feature::{Feature, FeatureCollection};
use crate::transport::{AsyncHttpClient, AsyncReqwestClient, HttpError};
use crate::wfs::{
    BuildFailure, FeatureReader, MissingPropertyPolicy, ReadFailure, ServerAck, SubmitFailure,
    SyncError, TransactionBuilder, TransactionDocument, TransactionOperation,
    TransactionSubmitter,
};

/// High-level facade over the read and write paths.
///
/// Owns the layer configuration, the missing-property policy and the HTTP
/// client, and hands them to the reader, builder and submitter on each call.
/// All operations take `&self`, so one service can serve concurrent calls.
///
/// # Example
///
/// ```ignore
/// use wfsync::config::ConfigFile;
/// use wfsync::service::SyncService;
/// use wfsync::wfs::TransactionOperation;
///
/// let service = SyncService::from_config(&ConfigFile::load()?)?;
/// let hydrants = service.read_features("fire_hydrants").await?;
/// let ack = service
///     .edit_features(&hydrants.features, TransactionOperation::Update, "fire_hydrants")
///     .await?;
/// ```
pub struct SyncService<C: AsyncHttpClient> {
    /// Endpoint and workspace binding
    layer: LayerConfig,
    /// How absent properties are written
    missing_property: MissingPropertyPolicy,
    /// Transport shared by reads and writes
    client: C,
}

impl<C: AsyncHttpClient> SyncService<C> {
    /// Creates a service with the default missing-property policy.
    pub fn new(layer: LayerConfig, client: C) -> Self {
        Self {
            layer,
            missing_property: MissingPropertyPolicy::default(),
            client,
        }
    }

    /// Sets how absent properties are rendered in transactions.
    pub fn with_missing_property_policy(mut self, policy: MissingPropertyPolicy) -> Self {
        self.missing_property = policy;
        self
    }

    pub fn layer(&self) -> &LayerConfig {
        &self.layer
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn missing_property_policy(&self) -> MissingPropertyPolicy {
        self.missing_property
    }

    /// Reads every feature of `layer_name`. See [`FeatureReader::read_features`].
    pub async fn read_features(&self, layer_name: &str) -> Result<FeatureCollection, ReadFailure> {
        FeatureReader::new(&self.layer, &self.client)
            .read_features(layer_name)
            .await
    }

    /// Builds a transaction document without sending it.
    pub fn build_transaction(
        &self,
        features: &[Feature],
        operation: TransactionOperation,
        layer_name: &str,
    ) -> Result<TransactionDocument, BuildFailure> {
        TransactionBuilder::new(&self.layer)
            .with_missing_property_policy(self.missing_property)
            .build(features, operation, layer_name)
    }

    /// Submits a previously built document.
    pub async fn submit(
        &self,
        document: &TransactionDocument,
    ) -> Result<ServerAck, SubmitFailure> {
        TransactionSubmitter::new(&self.layer, &self.client)
            .submit(document)
            .await
    }

    /// Builds and submits one transaction for `features`.
    ///
    /// Nothing is sent when the build fails.
    pub async fn edit_features(
        &self,
        features: &[Feature],
        operation: TransactionOperation,
        layer_name: &str,
    ) -> Result<ServerAck, SyncError> {
        let document = self.build_transaction(features, operation, layer_name)?;
        Ok(self.submit(&document).await?)
    }
}

impl SyncService<AsyncReqwestClient> {
    /// Creates a service backed by reqwest from the user configuration.
    ///
    /// Applies the configured timeout and bearer credential.
    pub fn from_config(config: &ConfigFile) -> Result<Self, HttpError> {
        let mut client = AsyncReqwestClient::with_timeout(config.server.timeout)?;
        if let Some(token) = &config.server.bearer_token {
            client = client.with_bearer_token(token);
        }

        info!(
            endpoint = %config.layer_config().endpoint(),
            workspace = %config.layer.workspace,
            timeout_secs = config.server.timeout,
            authenticated = client.has_bearer_token(),
            "Sync service configured"
        );

        Ok(Self::new(config.layer_config(), client)
            .with_missing_property_policy(config.transaction.missing_property))
    }
}
