//! Transport types

use thiserror::Error;

/// Errors that can occur while talking to the feature server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// The HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),

    /// The request could not be sent or the connection failed
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// The request exceeded the client timeout
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// The server rejected the credential attached to the request
    #[error("HTTP 401 Unauthorized from {url}")]
    Unauthorized { url: String },

    /// The server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body could not be read
    #[error("Failed to read response from {url}: {message}")]
    Body { url: String, message: String },
}

impl HttpError {
    /// Returns true when the caller should route the user to re-authentication.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, HttpError::Unauthorized { .. })
    }

    /// Returns true when the request hit the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::Timeout { .. })
    }

    /// Maps a non-success status code to the matching error.
    pub fn from_status(status: u16, url: &str) -> Self {
        if status == 401 {
            HttpError::Unauthorized {
                url: url.to_string(),
            }
        } else {
            HttpError::Status {
                status,
                url: url.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_401_to_unauthorized() {
        let err = HttpError::from_status(401, "http://example.com/wfs");
        assert!(err.is_unauthorized());
        assert_eq!(
            err.to_string(),
            "HTTP 401 Unauthorized from http://example.com/wfs"
        );
    }

    #[test]
    fn test_from_status_keeps_other_codes() {
        let err = HttpError::from_status(503, "http://example.com/wfs");
        assert_eq!(
            err,
            HttpError::Status {
                status: 503,
                url: "http://example.com/wfs".to_string()
            }
        );
        assert!(!err.is_unauthorized());
        assert!(!err.is_timeout());
    }
}
