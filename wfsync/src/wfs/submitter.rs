//! Transaction submitter.

use tracing::{debug, info, trace, warn};

use super::error::SubmitFailure;
use super::response::{parse_transaction_response, ServerAck};
use super::transaction::TransactionDocument;
use crate::config::LayerConfig;
use crate::transport::AsyncHttpClient;

/// Content type of transaction bodies.
pub const XML_CONTENT_TYPE: &str = "text/xml";

/// Accepted response type for transactions.
pub const XML_ACCEPT: &str = "application/xml";

/// Posts transaction documents to the feature server.
///
/// Each call is one request with no retry. Whether a transaction that timed
/// out was applied is unknown to the caller.
pub struct TransactionSubmitter<'a, C: AsyncHttpClient> {
    layer: &'a LayerConfig,
    client: &'a C,
}

impl<'a, C: AsyncHttpClient> TransactionSubmitter<'a, C> {
    pub fn new(layer: &'a LayerConfig, client: &'a C) -> Self {
        Self { layer, client }
    }

    /// Submits `document` and parses the server acknowledgement.
    pub async fn submit(
        &self,
        document: &TransactionDocument,
    ) -> Result<ServerAck, SubmitFailure> {
        let endpoint = self.layer.endpoint();
        debug!(
            url = %endpoint,
            operation = %document.operation(),
            layer = document.layer_name(),
            fragments = document.fragment_count(),
            "Submitting transaction"
        );
        trace!(body = document.as_xml(), "Transaction body");

        let headers = [("Content-Type", XML_CONTENT_TYPE), ("Accept", XML_ACCEPT)];
        let body = self
            .client
            .post(&endpoint, document.as_xml().to_string(), &headers)
            .await
            .map_err(|e| {
                warn!(
                    operation = %document.operation(),
                    layer = document.layer_name(),
                    error = %e,
                    "Transaction request failed"
                );
                SubmitFailure::from(e)
            })?;

        let text = String::from_utf8_lossy(&body);
        trace!(body = %text, "Transaction response");

        let ack = parse_transaction_response(&text).map_err(|e| {
            warn!(
                operation = %document.operation(),
                layer = document.layer_name(),
                error = %e,
                "Transaction rejected"
            );
            e
        })?;

        info!(
            operation = %document.operation(),
            layer = document.layer_name(),
            inserted = ack.inserted_ids.len(),
            "Transaction accepted"
        );
        Ok(ack)
    }
}
