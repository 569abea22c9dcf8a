//! Error types for the read and write paths.

use thiserror::Error;

use super::transaction::TransactionOperation;
use crate::transport::HttpError;

/// Errors raised while reading features from the server.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReadFailure {
    /// The GetFeature URL could not be built from the configuration.
    #[error("Invalid feature server endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    /// Transport failure or non-success status.
    #[error("Failed to load features: {0}")]
    Transport(#[from] HttpError),

    /// The server answered with an OGC exception report.
    #[error("Feature server rejected the query: {0}")]
    ServiceException(String),

    /// The body was not a GeoJSON FeatureCollection.
    #[error("Invalid feature collection: {0}")]
    InvalidResponse(String),
}

/// Errors raised while building a transaction document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildFailure {
    /// No features were supplied.
    #[error("No features supplied for the transaction")]
    EmptyInput,

    /// Every feature was dropped, or the operation produces no fragments.
    #[error("Nothing to submit for {operation}: {dropped} feature(s) were not eligible")]
    NothingToSubmit {
        operation: TransactionOperation,
        dropped: usize,
    },

    /// Serializing the element tree failed.
    #[error("Failed to serialize transaction XML: {0}")]
    Xml(String),
}

/// Errors raised while submitting a transaction document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitFailure {
    /// Transport failure or non-success status.
    #[error("Failed to submit transaction: {0}")]
    Transport(#[from] HttpError),

    /// The server answered with an OGC exception report.
    #[error("Feature server rejected the transaction: {0}")]
    ServiceException(String),

    /// The server processed the transaction and reported it as failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// The response could not be understood.
    #[error("Invalid transaction response: {0}")]
    InvalidResponse(String),
}

/// Errors from the combined build-and-submit path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    #[error(transparent)]
    Build(#[from] BuildFailure),

    #[error(transparent)]
    Submit(#[from] SubmitFailure),
}

impl SyncError {
    /// Returns true if the server rejected the bearer credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, SyncError::Submit(SubmitFailure::Transport(e)) if e.is_unauthorized())
    }
}

impl ReadFailure {
    /// Returns true if the server rejected the bearer credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ReadFailure::Transport(e) if e.is_unauthorized())
    }
}
