//! HTTP client abstraction for testability

use super::types::HttpError;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Default request timeout in seconds.
///
/// Every call gets the same flat deadline; there is no per-operation override.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Trait for asynchronous HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests. Implementations must return an
/// error for any non-success status rather than handing back the body.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an async HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The fully built URL, query string included
    ///
    /// # Returns
    ///
    /// The response body as bytes or an error.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;

    /// Performs an async HTTP POST request with custom headers.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to post to
    /// * `body` - Request body
    /// * `headers` - Slice of (header_name, header_value) tuples
    ///
    /// # Returns
    ///
    /// The response body as bytes or an error.
    fn post(
        &self,
        url: &str,
        body: String,
        headers: &[(&str, &str)],
    ) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;
}

/// HTTP client implementation using reqwest.
///
/// Optionally carries a bearer credential that is attached to every request.
#[derive(Clone)]
pub struct AsyncReqwestClient {
    client: reqwest::Client,
    bearer_token: Option<String>,
}

impl AsyncReqwestClient {
    /// Creates a new AsyncReqwestClient with the default timeout.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new AsyncReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("wfsync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HttpError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            bearer_token: None,
        })
    }

    /// Attaches a bearer credential to every request made by this client.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Returns true if a bearer credential is configured.
    pub fn has_bearer_token(&self) -> bool {
        self.bearer_token.is_some()
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute(
        &self,
        method: &str,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<Vec<u8>, HttpError> {
        trace!(method = method, url = url, "HTTP request starting");

        let response = match self.authorize(request).send().await {
            Ok(resp) => {
                debug!(
                    method = method,
                    url = url,
                    status = resp.status().as_u16(),
                    "HTTP response received"
                );
                resp
            }
            Err(e) => {
                warn!(
                    method = method,
                    url = url,
                    error = %e,
                    is_connect = e.is_connect(),
                    is_timeout = e.is_timeout(),
                    "HTTP request failed"
                );
                if e.is_timeout() {
                    return Err(HttpError::Timeout {
                        url: url.to_string(),
                    });
                }
                return Err(HttpError::Request {
                    url: url.to_string(),
                    message: e.to_string(),
                });
            }
        };

        // Check HTTP status
        let status = response.status();
        if !status.is_success() {
            warn!(
                method = method,
                url = url,
                status = status.as_u16(),
                "HTTP error status"
            );
            return Err(HttpError::from_status(status.as_u16(), url));
        }

        // Read response body
        match response.bytes().await {
            Ok(bytes) => {
                trace!(url = url, bytes = bytes.len(), "HTTP response body read");
                Ok(bytes.to_vec())
            }
            Err(e) => {
                warn!(
                    url = url,
                    error = %e,
                    is_timeout = e.is_timeout(),
                    "Failed to read response body"
                );
                if e.is_timeout() {
                    return Err(HttpError::Timeout {
                        url: url.to_string(),
                    });
                }
                Err(HttpError::Body {
                    url: url.to_string(),
                    message: e.to_string(),
                })
            }
        }
    }
}

impl AsyncHttpClient for AsyncReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        self.execute("GET", url, self.client.get(url)).await
    }

    async fn post(
        &self,
        url: &str,
        body: String,
        headers: &[(&str, &str)],
    ) -> Result<Vec<u8>, HttpError> {
        let mut request = self.client.post(url).body(body);

        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        self.execute("POST", url, request).await
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// A request captured by [`MockAsyncHttpClient`].
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        pub method: &'static str,
        pub url: String,
        pub body: Option<String>,
        pub headers: Vec<(String, String)>,
    }

    /// Mock async HTTP client for testing.
    ///
    /// Replays the same canned response for every call and records each
    /// request so tests can assert on URLs, bodies and headers.
    #[derive(Clone)]
    pub struct MockAsyncHttpClient {
        pub response: Result<Vec<u8>, HttpError>,
        pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    impl MockAsyncHttpClient {
        pub fn ok(body: impl Into<Vec<u8>>) -> Self {
            Self {
                response: Ok(body.into()),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn err(error: HttpError) -> Self {
            Self {
                response: Err(error),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn recorded(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl AsyncHttpClient for MockAsyncHttpClient {
        async fn get(&self, url: &str) -> Result<Vec<u8>, HttpError> {
            self.requests.lock().unwrap().push(RecordedRequest {
                method: "GET",
                url: url.to_string(),
                body: None,
                headers: Vec::new(),
            });
            self.response.clone()
        }

        async fn post(
            &self,
            url: &str,
            body: String,
            headers: &[(&str, &str)],
        ) -> Result<Vec<u8>, HttpError> {
            self.requests.lock().unwrap().push(RecordedRequest {
                method: "POST",
                url: url.to_string(),
                body: Some(body),
                headers: headers
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            });
            self.response.clone()
        }
    }

    #[tokio::test]
    async fn test_mock_async_client_success() {
        let mock = MockAsyncHttpClient::ok(vec![1, 2, 3, 4]);

        let result = mock.get("http://example.com").await;
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(mock.recorded().len(), 1);
        assert_eq!(mock.recorded()[0].method, "GET");
    }

    #[tokio::test]
    async fn test_mock_async_client_error() {
        let mock = MockAsyncHttpClient::err(HttpError::Timeout {
            url: "http://example.com".to_string(),
        });

        let result = mock.post("http://example.com", String::new(), &[]).await;
        assert!(result.unwrap_err().is_timeout());
    }

    #[tokio::test]
    async fn test_mock_records_post_headers() {
        let mock = MockAsyncHttpClient::ok(Vec::new());

        mock.post(
            "http://example.com/wfs",
            "<a/>".to_string(),
            &[("Content-Type", "text/xml")],
        )
        .await
        .unwrap();

        let request = &mock.recorded()[0];
        assert_eq!(request.body.as_deref(), Some("<a/>"));
        assert_eq!(
            request.headers,
            vec![("Content-Type".to_string(), "text/xml".to_string())]
        );
    }

    #[tokio::test]
    async fn test_stalled_body_is_a_timeout() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/wfs", listener.local_addr().unwrap());

        // Sends the headers and part of the body, then stalls
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await.unwrap();
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 64\r\n\r\n<wfs:")
                .await
                .unwrap();
            socket.flush().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let client = AsyncReqwestClient::with_timeout(1).unwrap();
        let err = client.get(&url).await.unwrap_err();

        assert_eq!(err, HttpError::Timeout { url: url.clone() });
        server.abort();
    }

    #[test]
    fn test_reqwest_client_bearer_token() {
        let client = AsyncReqwestClient::new().unwrap();
        assert!(!client.has_bearer_token());

        let client = client.with_bearer_token("secret");
        assert!(client.has_bearer_token());
    }
}
