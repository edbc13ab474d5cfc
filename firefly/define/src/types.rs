//! Core types for REST route definitions.
//!
//! This module provides the fundamental types for describing one API
//! operation:
//!
//! - [`Route`] - A single route with method, path template, query
//!   parameters, request body and per-status responses
//! - [`RestMethod`] - HTTP method enumeration
//! - [`QueryParam`] - A declared query-string parameter

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::request::ApiRequest;
use crate::response::{ApiResponse, ResponseTable};

/// HTTP methods supported by REST APIs.
///
/// ## Examples
///
/// Parse from string:
///
/// ```
/// use std::str::FromStr;
/// use firefly_define::RestMethod;
///
/// let method = RestMethod::from_str("GET").unwrap();
/// assert_eq!(method, RestMethod::Get);
/// ```
///
/// Display as uppercase:
///
/// ```
/// use firefly_define::RestMethod;
///
/// assert_eq!(RestMethod::Post.to_string(), "POST");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource
    Get,
    /// HTTP POST - Create a new resource
    Post,
    /// HTTP PUT - Replace a resource entirely
    Put,
    /// HTTP PATCH - Partially update a resource
    Patch,
    /// HTTP DELETE - Remove a resource
    Delete,
}

impl RestMethod {
    /// Returns `true` for methods that conventionally carry a request body.
    pub fn allows_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch | Self::Delete)
    }
}

/// A query-string parameter declared by a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    /// Parameter name as it appears on the wire.
    pub name: String,
    /// Whether the caller must supply a value.
    pub required: bool,
}

impl QueryParam {
    /// Creates an optional query parameter.
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
        }
    }

    /// Creates a required query parameter.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
        }
    }
}

/// A single API route definition.
///
/// Routes are immutable descriptors: the dispatcher reads them but never
/// changes them.
///
/// ## Path Parameters
///
/// Paths support template parameters using curly braces:
/// `/v1/accounts/{id}`. Every placeholder must be given a value at call
/// time.
///
/// ## Examples
///
/// ```
/// use firefly_define::{ApiResponse, Route, RestMethod, Shape, Field};
///
/// let route = Route::new("getAccount", "accounts", RestMethod::Get, "/v1/accounts/{id}")
///     .summary("Get single account information.")
///     .respond(200, ApiResponse::json_api(Shape::object(vec![
///         Field::new("data", Shape::Any),
///     ])))
///     .respond(404, ApiResponse::json(Shape::Any));
///
/// assert_eq!(route.path_params(), vec!["id"]);
/// assert!(route.responses.get(200).is_some());
/// assert!(route.validate_response);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Identifier for this route, unique within its API (camelCase, e.g. `getAccount`).
    pub id: String,
    /// Resource group the route belongs to (e.g. `accounts`, `transactions`).
    pub resource: String,
    /// HTTP method for this route.
    pub method: RestMethod,
    /// Path template (e.g. `/v1/accounts/{id}`).
    pub path: String,
    /// One-line description of what this route does.
    pub summary: String,
    /// Query parameters the route understands.
    pub query: Vec<QueryParam>,
    /// Request body definition (`None` when the route takes no body).
    pub request: Option<ApiRequest>,
    /// Declared response per status code.
    pub responses: ResponseTable,
    /// Whether the route accepts an `X-Trace-Id` correlation header.
    pub trace_header: bool,
    /// Whether structured responses are validated against their declared shape.
    pub validate_response: bool,
}

impl Route {
    /// Creates a route with no query parameters, body or responses.
    ///
    /// Responses are validated by default and the trace header is accepted.
    pub fn new(
        id: impl Into<String>,
        resource: impl Into<String>,
        method: RestMethod,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            resource: resource.into(),
            method,
            path: path.into(),
            summary: String::new(),
            query: Vec::new(),
            request: None,
            responses: ResponseTable::default(),
            trace_header: true,
            validate_response: true,
        }
    }

    /// Sets the route summary.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Adds a declared query parameter.
    pub fn query(mut self, param: QueryParam) -> Self {
        self.query.push(param);
        self
    }

    /// Sets the request body definition.
    pub fn request(mut self, request: ApiRequest) -> Self {
        self.request = Some(request);
        self
    }

    /// Declares the response for a status code, replacing any earlier one.
    pub fn respond(mut self, status: u16, response: ApiResponse) -> Self {
        self.responses.insert(status, response);
        self
    }

    /// Marks the route as not accepting the `X-Trace-Id` header.
    pub fn without_trace_header(mut self) -> Self {
        self.trace_header = false;
        self
    }

    /// Disables response validation for this route unless a call opts back in.
    pub fn without_validation(mut self) -> Self {
        self.validate_response = false;
        self
    }

    /// Returns the placeholder names of the path template in order.
    ///
    /// ## Examples
    ///
    /// ```
    /// use firefly_define::{Route, RestMethod};
    ///
    /// let route = Route::new("x", "webhooks", RestMethod::Get,
    ///     "/v1/webhooks/{id}/messages/{messageId}");
    /// assert_eq!(route.path_params(), vec!["id", "messageId"]);
    /// ```
    pub fn path_params(&self) -> Vec<&str> {
        let mut params = Vec::new();
        let mut rest = self.path.as_str();

        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                break;
            };
            if end > 0 {
                params.push(&after[..end]);
            }
            rest = &after[end + 1..];
        }

        params
    }

    /// Returns the media type of the first declared 2xx response, if any.
    pub fn success_media_type(&self) -> Option<&str> {
        self.responses
            .iter()
            .find(|(status, _)| (200..300).contains(status))
            .and_then(|(_, response)| response.media_type())
    }

    /// Matches a concrete path against the template.
    ///
    /// Returns the number of literal segments that matched, so callers can
    /// prefer `/v1/currencies/default` over `/v1/currencies/{code}`. Query
    /// strings are ignored.
    ///
    /// ## Examples
    ///
    /// ```
    /// use firefly_define::{Route, RestMethod};
    ///
    /// let route = Route::new("getAccount", "accounts", RestMethod::Get, "/v1/accounts/{id}");
    /// assert_eq!(route.match_path("/v1/accounts/42"), Some(2));
    /// assert_eq!(route.match_path("/v1/accounts"), None);
    /// ```
    pub fn match_path(&self, path: &str) -> Option<usize> {
        let path = path.split_once('?').map_or(path, |(path, _)| path);
        let template: Vec<&str> = self.path.trim_matches('/').split('/').collect();
        let concrete: Vec<&str> = path.trim_matches('/').split('/').collect();

        if template.len() != concrete.len() {
            return None;
        }

        let mut literals = 0;
        for (expected, actual) in template.iter().zip(&concrete) {
            if expected.starts_with('{') && expected.ends_with('}') {
                if actual.is_empty() {
                    return None;
                }
            } else if expected == actual {
                literals += 1;
            } else {
                return None;
            }
        }

        Some(literals)
    }

    /// Returns the names of required query parameters.
    pub fn required_query(&self) -> impl Iterator<Item = &str> {
        self.query
            .iter()
            .filter(|param| param.required)
            .map(|param| param.name.as_str())
    }
}
