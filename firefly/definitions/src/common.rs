//! Shapes and route helpers shared by every resource group.
//!
//! Firefly III wraps read responses in JSON:API envelopes (`{data, meta,
//! links}`) and answers faults with a small `{message, exception}` body.
//! The builders here keep the per-resource modules down to the fields that
//! actually differ.

use firefly_define::{ApiResponse, Field, QueryParam, Route, Shape};
use serde_json::json;

/// Pagination block of `meta`.
pub fn meta() -> Shape {
    Shape::object(vec![
        Field::new(
            "pagination",
            Shape::object(vec![
                Field::new("total", Shape::integer()).optional(),
                Field::new("count", Shape::integer()).optional(),
                Field::new("per_page", Shape::integer()).optional(),
                Field::new("current_page", Shape::integer()).optional(),
                Field::new("total_pages", Shape::integer()).optional(),
            ]),
        )
        .optional(),
    ])
}

/// `links` block of a paged list.
pub fn page_link() -> Shape {
    Shape::object(vec![
        Field::new("self", Shape::url()).optional(),
        Field::new("first", Shape::url()).optional(),
        Field::new("next", Shape::url()).nullish(),
        Field::new("prev", Shape::url()).nullish(),
        Field::new("last", Shape::url()).optional(),
    ])
}

/// `links` block of a single resource object.
pub fn object_link() -> Shape {
    Shape::object(vec![
        Field::new(
            "0",
            Shape::object(vec![
                Field::new("rel", Shape::string()).optional(),
                Field::new("uri", Shape::string()).optional(),
            ]),
        )
        .optional(),
        Field::new("self", Shape::url()).optional(),
    ])
}

/// Boolean, string, object or list of strings.
pub fn polymorphic() -> Shape {
    Shape::one_of(vec![
        Shape::boolean(),
        Shape::string(),
        Shape::object(vec![]),
        Shape::array(Shape::string()),
    ])
}

/// `created_at` / `updated_at` followed by `fields`.
pub fn timestamped(fields: Vec<Field>) -> Shape {
    let mut all = vec![
        Field::new("created_at", Shape::date_time()).optional(),
        Field::new("updated_at", Shape::date_time()).optional(),
    ];
    all.extend(fields);
    Shape::object(all)
}

/// Optional string field, the most common attribute kind.
pub fn text(name: &str) -> Field {
    Field::new(name, Shape::string()).optional()
}

/// Nullish string field.
pub fn maybe_text(name: &str) -> Field {
    Field::new(name, Shape::string()).nullish()
}

/// Optional boolean with a default of `true`.
pub fn enabled_by_default(name: &str) -> Field {
    Field::new(name, Shape::boolean()).with_default(json!(true))
}

/// A JSON:API resource object. `links` is declared when `linked` is set.
pub fn read(attributes: Shape, linked: bool) -> Shape {
    let mut fields = vec![
        Field::new("type", Shape::string()),
        Field::new("id", Shape::string()),
        Field::new("attributes", attributes),
    ];
    if linked {
        fields.push(Field::new("links", object_link()));
    }
    Shape::object(fields)
}

/// `{data: <read>}`.
pub fn single(read: Shape) -> Shape {
    Shape::object(vec![Field::new("data", read)])
}

/// `{data: [<read>], meta}` plus `links` when `paged` is set.
pub fn array(read: Shape, paged: bool) -> Shape {
    let mut fields = vec![
        Field::new("data", Shape::array(read)),
        Field::new("meta", meta()),
    ];
    if paged {
        fields.push(Field::new("links", page_link()));
    }
    Shape::object(fields)
}

/// Body of 400, 401, 404 and 500 responses.
pub fn error_body() -> Shape {
    Shape::object(vec![text("message"), text("exception")])
}

/// Body of 422 responses: a message plus per-field messages.
pub fn validation_error_body() -> Shape {
    Shape::object(vec![
        text("message"),
        Field::new("errors", Shape::record(Shape::array(Shape::string()))).optional(),
    ])
}

/// Chainable shorthands for the declarations most routes share.
pub trait RouteExt {
    /// Declares `limit` and `page`.
    fn paged(self) -> Self;
    /// Declares 400, 401, 404 and 500 error bodies.
    fn with_errors(self) -> Self;
    /// Declares 400, 401, 404, 422 and 500 error bodies.
    fn with_validation_errors(self) -> Self;
    /// Declares a JSON:API 200 response.
    fn reads(self, body: Shape) -> Self;
    /// Declares an empty 204 response.
    fn no_content(self) -> Self;
}

impl RouteExt for Route {
    fn paged(self) -> Self {
        self.query(QueryParam::optional("limit"))
            .query(QueryParam::optional("page"))
    }

    fn with_errors(self) -> Self {
        self.respond(400, ApiResponse::json(error_body()))
            .respond(401, ApiResponse::json(error_body()))
            .respond(404, ApiResponse::json(error_body()))
            .respond(500, ApiResponse::json(error_body()))
    }

    fn with_validation_errors(self) -> Self {
        self.with_errors()
            .respond(422, ApiResponse::json(validation_error_body()))
    }

    fn reads(self, body: Shape) -> Self {
        self.respond(200, ApiResponse::json_api(body))
    }

    fn no_content(self) -> Self {
        self.respond(204, ApiResponse::Empty)
    }
}
