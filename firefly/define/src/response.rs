//! API response type definitions.
//!
//! This module defines what a route can return for each status code. The
//! declared response decides which shape, if any, a structured body is
//! validated against.

use crate::schema::Shape;

/// Media type for plain JSON bodies.
pub const JSON: &str = "application/json";

/// Media type for JSON:API bodies (`{data, meta, links}` envelopes).
pub const JSON_API: &str = "application/vnd.api+json";

/// Describes the expected response for one status code.
///
/// ## Examples
///
/// ```
/// use firefly_define::{ApiResponse, Shape};
///
/// let read = ApiResponse::json_api(Shape::Any);
/// assert_eq!(read.media_type(), Some("application/vnd.api+json"));
/// assert!(read.shape().is_some());
///
/// let deleted = ApiResponse::Empty;
/// assert!(deleted.shape().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// JSON body (`application/json`) with a declared shape.
    Json(Shape),

    /// JSON:API body (`application/vnd.api+json`) with a declared shape.
    JsonApi(Shape),

    /// Text body (e.g. a CSV export). Never validated.
    Text {
        /// MIME type of the body.
        content_type: String,
    },

    /// Binary body (e.g. an attachment download). Never validated.
    Binary {
        /// MIME type of the body.
        content_type: String,
    },

    /// No response body expected (204 No Content).
    Empty,
}

impl ApiResponse {
    /// Creates a JSON response with the given shape.
    pub fn json(shape: Shape) -> Self {
        Self::Json(shape)
    }

    /// Creates a JSON:API response with the given shape.
    pub fn json_api(shape: Shape) -> Self {
        Self::JsonApi(shape)
    }

    /// Creates a text response.
    pub fn text(content_type: impl Into<String>) -> Self {
        Self::Text {
            content_type: content_type.into(),
        }
    }

    /// Creates a binary response.
    pub fn binary(content_type: impl Into<String>) -> Self {
        Self::Binary {
            content_type: content_type.into(),
        }
    }

    /// Returns the shape a structured body must match, if one is declared.
    pub fn shape(&self) -> Option<&Shape> {
        match self {
            Self::Json(shape) | Self::JsonApi(shape) => Some(shape),
            _ => None,
        }
    }

    /// Returns the declared media type, or `None` for empty responses.
    pub fn media_type(&self) -> Option<&str> {
        match self {
            Self::Json(_) => Some(JSON),
            Self::JsonApi(_) => Some(JSON_API),
            Self::Text { content_type } | Self::Binary { content_type } => Some(content_type),
            Self::Empty => None,
        }
    }

    /// Returns true if this is a JSON or JSON:API response.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_) | Self::JsonApi(_))
    }

    /// Returns true if this is a text response.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Returns true if this is a binary response.
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary { .. })
    }

    /// Returns true if this is an empty response.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Declared responses of a route, keyed by status code.
///
/// Lookups are exact: a status that was not declared has no response, it
/// never falls back to another status's declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseTable {
    entries: Vec<(u16, ApiResponse)>,
}

impl ResponseTable {
    /// Declares the response for `status`, replacing an earlier declaration.
    pub fn insert(&mut self, status: u16, response: ApiResponse) {
        match self.entries.iter_mut().find(|(code, _)| *code == status) {
            Some(entry) => entry.1 = response,
            None => self.entries.push((status, response)),
        }
    }

    /// Returns the response declared for exactly `status`.
    pub fn get(&self, status: u16) -> Option<&ApiResponse> {
        self.entries
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, response)| response)
    }

    /// Iterates declarations in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &ApiResponse)> {
        self.entries.iter().map(|(code, response)| (*code, response))
    }

    /// Returns the declared status codes.
    pub fn statuses(&self) -> Vec<u16> {
        self.entries.iter().map(|(code, _)| *code).collect()
    }

    /// Returns the number of declared statuses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no status is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
