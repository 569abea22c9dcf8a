//! WFS read and WFS-T write paths.
//!
//! - [`FeatureReader`] issues GetFeature queries and returns GeoJSON
//!   collections with normalized identifiers.
//! - [`TransactionBuilder`] turns a batch of features into one transaction
//!   document.
//! - [`TransactionSubmitter`] posts the document and parses the server
//!   acknowledgement.
//!
//! The components share nothing but the read-only [`LayerConfig`] and the
//! HTTP client, so reads and writes may run concurrently.
//!
//! [`LayerConfig`]: crate::config::LayerConfig

mod error;
mod query;
mod reader;
mod response;
mod submitter;
pub mod transaction;

pub use error::{BuildFailure, ReadFailure, SubmitFailure, SyncError};
pub use query::{
    GetFeatureQuery, GEOJSON_OUTPUT_FORMAT, GET_FEATURE, READ_VERSION, WFS_SERVICE, WGS84_SRS_NAME,
};
pub use reader::FeatureReader;
pub use response::{parse_exception_report, parse_transaction_response, ServerAck};
pub use submitter::{TransactionSubmitter, XML_ACCEPT, XML_CONTENT_TYPE};
pub use transaction::{
    MissingPropertyPolicy, TransactionBuilder, TransactionDocument, TransactionOperation,
};
