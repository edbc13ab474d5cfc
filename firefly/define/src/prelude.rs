//! Convenient re-exports for writing route definitions.
//!
//! ## Examples
//!
//! ```
//! use firefly_define::prelude::*;
//!
//! let route = Route::new("getAbout", "about", RestMethod::Get, "/v1/about")
//!     .respond(200, ApiResponse::json(Shape::object(vec![
//!         Field::new("data", Shape::Any),
//!     ])));
//!
//! assert_eq!(route.success_media_type(), Some("application/json"));
//! ```

pub use crate::request::{ApiRequest, FormField};
pub use crate::response::{ApiResponse, ResponseTable};
pub use crate::schema::{Field, Presence, Shape, ShapeError, StringFormat, Violation};
pub use crate::types::{QueryParam, RestMethod, Route};
