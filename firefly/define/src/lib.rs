//! Firefly Definition Library
//!
//! This crate provides the primitives for describing the Firefly III REST API
//! declaratively. The route catalog in `firefly-definitions` is written with
//! them and the dispatcher in `firefly-client` reads them.
//!
//! ## Core Types
//!
//! - [`Route`] - A single API route with method, path template, query
//!   parameters, request body and per-status responses
//! - [`RestMethod`] - HTTP methods (GET, POST, PUT, etc.)
//! - [`QueryParam`] - A declared query-string parameter
//! - [`ApiRequest`] - Request body definitions (JSON, UrlEncoded, Text, Binary)
//! - [`FormField`] - Field of a URL-encoded request
//! - [`ApiResponse`] - Response definitions (JSON, JSON:API, Text, Binary, Empty)
//! - [`ResponseTable`] - Declared responses keyed by status code
//! - [`Shape`] - Structural description of a JSON body, with validation
//!
//! ## Examples
//!
//! ```
//! use firefly_define::{ApiResponse, Field, QueryParam, RestMethod, Route, Shape};
//! use serde_json::json;
//!
//! let route = Route::new("listAccount", "accounts", RestMethod::Get, "/v1/accounts")
//!     .query(QueryParam::optional("type"))
//!     .respond(200, ApiResponse::json_api(Shape::object(vec![
//!         Field::new("data", Shape::array(Shape::Any)),
//!     ])));
//!
//! let shape = route.responses.get(200).and_then(ApiResponse::shape).unwrap();
//! assert!(shape.validate(&json!({"data": []})).is_ok());
//! assert!(shape.validate(&json!({"data": {}})).is_err());
//! ```

pub mod prelude;
pub mod request;
pub mod response;
pub mod schema;
pub mod types;

// Re-export main types at crate root
pub use request::{ApiRequest, FormField};
pub use response::{ApiResponse, ResponseTable};
pub use schema::{Field, Presence, Shape, ShapeError, StringFormat, Violation};
pub use types::{QueryParam, RestMethod, Route};
