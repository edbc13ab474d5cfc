//! The decoded response.

use bytes::Bytes;
use firefly_definitions::{ErrorResponse, RouteId};
use reqwest::header::HeaderMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::ContentKind;
use crate::error::{ApiError, ServerError, ValidationError};

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Parsed (and, when enabled, validated) JSON.
    Json(serde_json::Value),
    /// A `text/*` body.
    Text(String),
    /// Any other body, unmodified.
    Binary(Bytes),
    /// The server sent no body.
    Empty,
}

impl ResponseBody {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&Bytes> {
        match self {
            Self::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Json(_) => ContentKind::Structured.as_str(),
            Self::Text(_) => ContentKind::Text.as_str(),
            Self::Binary(_) => ContentKind::Binary.as_str(),
            Self::Empty => "empty",
        }
    }
}

/// Status, headers and decoded body of one dispatch.
///
/// Non-success statuses are ordinary envelopes; use
/// [`error_for_status`](Self::error_for_status) to turn them into errors.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub route: RouteId,
    pub status: u16,
    pub headers: HeaderMap,
    pub body: ResponseBody,
    /// Whether `body` was checked against a declared shape.
    pub validated: bool,
}

impl Envelope {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The response `Content-Type`, if present and readable.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    /// Deserializes the JSON body into `T`.
    ///
    /// ## Examples
    ///
    /// ```
    /// use firefly_client::{Envelope, ResponseBody};
    /// use firefly_definitions::{RouteId, Single, accounts::Account};
    /// use serde_json::json;
    ///
    /// let envelope = Envelope {
    ///     route: RouteId::GetAccount,
    ///     status: 200,
    ///     headers: Default::default(),
    ///     body: ResponseBody::Json(json!({"data": {
    ///         "type": "accounts",
    ///         "id": "42",
    ///         "attributes": {"name": "Checking", "type": "asset"}
    ///     }})),
    ///     validated: true,
    /// };
    ///
    /// let account: Single<Account> = envelope.json().unwrap();
    /// assert_eq!(account.data.attributes.name, "Checking");
    /// ```
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ValidationError> {
        match &self.body {
            ResponseBody::Json(value) => Ok(T::deserialize(value)?),
            other => Err(ValidationError::NotJson { found: other.kind() }),
        }
    }

    /// Decodes the standard error body of a non-success response.
    ///
    /// Returns `None` for 2xx responses and for bodies that are not JSON
    /// objects.
    pub fn error_response(&self) -> Option<ErrorResponse> {
        if self.is_success() {
            return None;
        }
        self.body
            .as_json()
            .and_then(|value| ErrorResponse::deserialize(value).ok())
    }

    /// Converts a non-2xx envelope into [`ApiError::Server`].
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            return Ok(self);
        }

        let body = self.error_response().unwrap_or_else(|| ErrorResponse {
            message: self
                .body
                .as_text()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string),
            ..Default::default()
        });

        Err(ServerError {
            route: self.route.to_string(),
            status: self.status,
            body,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(status: u16, body: ResponseBody) -> Envelope {
        Envelope {
            route: RouteId::StoreAccount,
            status,
            headers: HeaderMap::new(),
            body,
            validated: false,
        }
    }

    #[test]
    fn error_response_decodes_field_messages() {
        let env = envelope(
            422,
            ResponseBody::Json(json!({
                "message": "The given data was invalid.",
                "errors": {"name": ["This account name is already in use."]}
            })),
        );
        let error = env.error_response().unwrap();
        assert_eq!(
            error.field_errors("name"),
            ["This account name is already in use.".to_string()]
        );
    }

    #[test]
    fn error_response_is_none_on_success() {
        let env = envelope(200, ResponseBody::Json(json!({"message": "ok"})));
        assert!(env.error_response().is_none());
    }

    #[test]
    fn error_for_status_passes_success_through() {
        let env = envelope(204, ResponseBody::Empty);
        assert!(env.error_for_status().is_ok());
    }

    #[test]
    fn error_for_status_converts_failures() {
        let env = envelope(404, ResponseBody::Json(json!({"message": "Resource not found"})));
        let Err(ApiError::Server(err)) = env.error_for_status() else {
            panic!("expected a server error");
        };
        assert_eq!(err.status, 404);
        assert_eq!(err.route, "storeAccount");
        assert_eq!(err.message(), "Resource not found");
    }

    #[test]
    fn error_for_status_falls_back_to_text() {
        let env = envelope(500, ResponseBody::Text("Server Error\n".to_string()));
        let Err(ApiError::Server(err)) = env.error_for_status() else {
            panic!("expected a server error");
        };
        assert_eq!(err.message(), "Server Error");
    }

    #[test]
    fn json_on_binary_body_fails() {
        let env = envelope(200, ResponseBody::Binary(Bytes::from_static(b"%PDF")));
        let err = env.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, ValidationError::NotJson { found: "binary" }));
    }

    #[test]
    fn json_type_mismatch_is_parse_error() {
        let env = envelope(200, ResponseBody::Json(json!({"data": []})));
        let err = env.json::<firefly_definitions::Single<serde_json::Value>>().unwrap_err();
        assert!(err.is_parse_error());
    }
}
