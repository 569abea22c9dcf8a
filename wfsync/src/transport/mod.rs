//! HTTP transport abstraction
//!
//! The feature reader and transaction submitter talk to the feature server
//! through the [`AsyncHttpClient`] trait so that tests can swap in a mock
//! client. [`AsyncReqwestClient`] is the production implementation.
//!
//! ```ignore
//! use wfsync::transport::AsyncReqwestClient;
//!
//! let client = AsyncReqwestClient::with_timeout(5)?.with_bearer_token(token);
//! ```

mod http;
mod types;

pub use http::{AsyncHttpClient, AsyncReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use types::HttpError;

#[cfg(test)]
pub use http::tests::{MockAsyncHttpClient, RecordedRequest};
