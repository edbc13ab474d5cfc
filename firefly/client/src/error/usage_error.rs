//! Caller faults detected while building a request.

use thiserror::Error;

/// The call cannot be turned into a request.
///
/// Raised by [`FireflyClient::prepare`](crate::FireflyClient::prepare) before
/// any network traffic happens.
#[derive(Debug, Error)]
pub enum UsageError {
    /// A `{name}` placeholder in the path template has no value.
    #[error("{route}: missing value for path placeholder {{{name}}}")]
    MissingPathParam { route: String, name: String },

    /// A query parameter the route requires was not supplied.
    #[error("{route}: missing required query parameter `{name}`")]
    MissingQueryParam { route: String, name: String },

    /// A form field the route requires was not supplied.
    #[error("{route}: missing required form field `{name}`")]
    MissingFormField { route: String, name: String },

    /// A body was supplied for a route that declares none.
    #[error("{route} does not accept a request body")]
    UnexpectedBody { route: String },

    /// The body kind does not fit the route's declared content type.
    #[error("{route} expects a {expected} body, got {found}")]
    BodyMismatch {
        route: String,
        expected: String,
        found: &'static str,
    },

    /// A per-call header has an invalid name or value.
    #[error("Invalid header {name}: {message}")]
    InvalidHeader { name: String, message: String },

    /// The body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl UsageError {
    pub fn missing_path(route: impl ToString, name: impl Into<String>) -> Self {
        Self::MissingPathParam {
            route: route.to_string(),
            name: name.into(),
        }
    }

    pub fn missing_query(route: impl ToString, name: impl Into<String>) -> Self {
        Self::MissingQueryParam {
            route: route.to_string(),
            name: name.into(),
        }
    }
}
