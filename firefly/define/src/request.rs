//! API request body type definitions.
//!
//! This module defines the kinds of request body a route can accept. The
//! request kind determines the `Content-Type` the dispatcher tags the body
//! with.
//!
//! ## Request Types
//!
//! - [`ApiRequest::Json`] - JSON request body (most write routes)
//! - [`ApiRequest::UrlEncoded`] - URL-encoded form data (configuration updates)
//! - [`ApiRequest::Text`] - Raw text body
//! - [`ApiRequest::Binary`] - Raw binary body (attachment uploads)

use crate::schema::Shape;

/// `Content-Type` for JSON request bodies.
pub const JSON: &str = "application/json";

/// `Content-Type` for URL-encoded form bodies.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Describes a single field of a URL-encoded form.
///
/// ## Examples
///
/// ```
/// use firefly_define::FormField;
///
/// let value = FormField::text("value");
/// assert!(value.required);
///
/// let note = FormField::text("note").optional().with_description("Free text");
/// assert!(!note.required);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Field name as sent on the wire.
    pub name: String,
    /// Whether this field is required.
    pub required: bool,
    /// Human-readable description of this field.
    pub description: Option<String>,
}

impl FormField {
    /// Creates a required text field.
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            description: None,
        }
    }

    /// Makes the field optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Adds a description to the field.
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}

/// Describes the request body format for a route.
///
/// ## Examples
///
/// ```
/// use firefly_define::{ApiRequest, FormField, Shape, Field};
///
/// let json = ApiRequest::json(Shape::object(vec![Field::new("name", Shape::string())]));
/// assert_eq!(json.content_type(), "application/json");
///
/// let form = ApiRequest::url_encoded(vec![FormField::text("value")]);
/// assert_eq!(form.content_type(), "application/x-www-form-urlencoded");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    /// JSON request body with the shape the server expects.
    Json(Shape),

    /// URL-encoded form data.
    UrlEncoded {
        /// Fields in the form.
        fields: Vec<FormField>,
    },

    /// Raw text body.
    Text {
        /// MIME type (e.g., "text/plain").
        content_type: String,
    },

    /// Raw binary body.
    Binary {
        /// MIME type (e.g., "application/octet-stream").
        content_type: String,
    },
}

impl ApiRequest {
    /// Creates a JSON request with the given shape.
    pub fn json(shape: Shape) -> Self {
        Self::Json(shape)
    }

    /// Creates a URL-encoded form request.
    pub fn url_encoded(fields: Vec<FormField>) -> Self {
        Self::UrlEncoded { fields }
    }

    /// Creates a raw text request.
    pub fn text(content_type: impl Into<String>) -> Self {
        Self::Text {
            content_type: content_type.into(),
        }
    }

    /// Creates a raw binary request.
    pub fn binary(content_type: impl Into<String>) -> Self {
        Self::Binary {
            content_type: content_type.into(),
        }
    }

    /// Returns the `Content-Type` the body is sent with.
    pub fn content_type(&self) -> &str {
        match self {
            Self::Json(_) => JSON,
            Self::UrlEncoded { .. } => FORM_URLENCODED,
            Self::Text { content_type } | Self::Binary { content_type } => content_type,
        }
    }

    /// Returns true if this is a JSON request.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// Returns true if this is a URL-encoded form request.
    pub fn is_url_encoded(&self) -> bool {
        matches!(self, Self::UrlEncoded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_field_text_is_required() {
        let field = FormField::text("value");
        assert_eq!(field.name, "value");
        assert!(field.required);
        assert!(field.description.is_none());
    }

    #[test]
    fn form_field_builder_chaining() {
        let field = FormField::text("notes")
            .optional()
            .with_description("Optional notes");

        assert!(!field.required);
        assert_eq!(field.description.as_deref(), Some("Optional notes"));
    }

    #[test]
    fn content_types() {
        assert_eq!(ApiRequest::json(Shape::Any).content_type(), JSON);
        assert_eq!(
            ApiRequest::url_encoded(vec![]).content_type(),
            FORM_URLENCODED
        );
        assert_eq!(ApiRequest::text("text/plain").content_type(), "text/plain");
        assert_eq!(
            ApiRequest::binary("application/octet-stream").content_type(),
            "application/octet-stream"
        );
    }

    #[test]
    fn kind_predicates() {
        assert!(ApiRequest::json(Shape::Any).is_json());
        assert!(!ApiRequest::json(Shape::Any).is_url_encoded());
        assert!(ApiRequest::url_encoded(vec![FormField::text("value")]).is_url_encoded());
    }
}
