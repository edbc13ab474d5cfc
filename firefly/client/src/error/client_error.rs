//! HTTP client and network errors.

use thiserror::Error;

/// Transport failures of a dispatch.
///
/// The dispatcher never retries; [`is_retryable`](Self::is_retryable) only
/// classifies the failure for callers that want to.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        duration_ms: u64,
    },

    /// Failed to establish connection to the server.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Headers arrived but the body could not be read to the end.
    #[error("Reading the {route} response body failed: {source}")]
    ReadBody {
        route: String,
        #[source]
        source: reqwest::Error,
    },

    /// The caller's cancel signal fired before the response arrived.
    #[error("Request for {route} was cancelled")]
    Cancelled {
        /// Identifier of the route being dispatched.
        route: String,
    },
}

impl ClientError {
    /// Returns `true` if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connection(_) => true,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            Self::ReadBody { .. } | Self::Cancelled { .. } => false,
        }
    }

    /// Returns the HTTP status code carried by the underlying error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request(e) | Self::ReadBody { source: e, .. } => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the request was cancelled by the caller.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_retryable() {
        let err = ClientError::Timeout { duration_ms: 5000 };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_connection_is_retryable() {
        let err = ClientError::Connection("connection refused".to_string());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_cancelled_is_not_retryable() {
        let err = ClientError::Cancelled {
            route: "getAccount".to_string(),
        };
        assert!(!err.is_retryable());
        assert!(err.is_cancelled());
        assert_eq!(err.to_string(), "Request for getAccount was cancelled");
    }

    #[test]
    fn test_status_code_absent_without_response() {
        let err = ClientError::Timeout { duration_ms: 1000 };
        assert_eq!(err.status_code(), None);
    }
}
