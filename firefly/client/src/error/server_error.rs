//! Server-declared faults.

use firefly_definitions::ErrorResponse;
use thiserror::Error;

/// A non-success status converted into an error by
/// [`Envelope::error_for_status`](crate::Envelope::error_for_status).
#[derive(Debug, Clone, Error)]
#[error("{route} failed with HTTP {status}: {}", self.message())]
pub struct ServerError {
    /// Identifier of the route that was called.
    pub route: String,
    /// HTTP status returned by the server.
    pub status: u16,
    /// Decoded error body; empty when the server sent none.
    pub body: ErrorResponse,
}

impl ServerError {
    /// The server's message, or a generic one when it sent none.
    pub fn message(&self) -> &str {
        self.body.message.as_deref().unwrap_or("no message")
    }

    /// Returns `true` for 422 responses, which carry per-field messages.
    pub fn is_validation_failure(&self) -> bool {
        self.status == 422
    }

    /// Returns `true` for 4xx statuses.
    pub fn is_client_fault(&self) -> bool {
        (400..500).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_display_uses_server_message() {
        let err = ServerError {
            route: "storeAccount".to_string(),
            status: 422,
            body: ErrorResponse {
                message: Some("The given data was invalid.".to_string()),
                exception: None,
                errors: BTreeMap::from([(
                    "name".to_string(),
                    vec!["This account name is already in use.".to_string()],
                )]),
            },
        };
        assert_eq!(
            err.to_string(),
            "storeAccount failed with HTTP 422: The given data was invalid."
        );
        assert!(err.is_validation_failure());
        assert!(err.is_client_fault());
    }

    #[test]
    fn test_display_without_body() {
        let err = ServerError {
            route: "getAbout".to_string(),
            status: 500,
            body: ErrorResponse::default(),
        };
        assert_eq!(err.to_string(), "getAbout failed with HTTP 500: no message");
        assert!(!err.is_client_fault());
    }
}
