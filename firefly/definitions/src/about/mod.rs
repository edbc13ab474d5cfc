//! System information routes.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | getAbout | GET | /v1/about |
//! | getCurrentUser | GET | /v1/about/user |

mod types;

pub use types::{SystemInfo, SystemInfoData, User};

use firefly_define::{ApiResponse, Field, RestMethod, Route, Shape};

use crate::common::{RouteExt, read, single, text, timestamped};

const RESOURCE: &str = "about";

fn system_info() -> Shape {
    Shape::object(vec![
        Field::new(
            "data",
            Shape::object(vec![
                text("version"),
                text("api_version"),
                text("php_version"),
                text("os"),
                text("driver"),
            ]),
        )
        .optional(),
    ])
}

/// Attributes of a user account.
pub fn user() -> Shape {
    timestamped(vec![
        Field::new("email", Shape::email()),
        Field::new("blocked", Shape::boolean()).optional(),
        Field::new(
            "blocked_code",
            Shape::enumeration(["email_changed", "null"]),
        )
        .nullish(),
        Field::new("role", Shape::enumeration(["owner", "demo", "null"])).nullish(),
    ])
}

pub fn get_about() -> Route {
    Route::new("getAbout", RESOURCE, RestMethod::Get, "/v1/about")
        .summary("System information end point.")
        .respond(200, ApiResponse::json(system_info()))
        .with_errors()
}

pub fn get_current_user() -> Route {
    Route::new("getCurrentUser", RESOURCE, RestMethod::Get, "/v1/about/user")
        .summary("Currently authenticated user endpoint.")
        .reads(single(read(user(), true)))
        .with_errors()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn about_is_plain_json() {
        let route = get_about();
        assert_eq!(route.success_media_type(), Some("application/json"));
        assert!(route.path_params().is_empty());
    }

    #[test]
    fn about_data_is_optional() {
        let shape = system_info();
        assert!(shape.validate(&json!({})).is_ok());
        assert!(shape.validate(&json!({"data": {"version": 6}})).is_err());
    }

    #[test]
    fn current_user_requires_valid_email() {
        let shape = get_current_user()
            .responses
            .get(200)
            .and_then(ApiResponse::shape)
            .cloned()
            .unwrap();

        let body = |email: &str| {
            json!({"data": {
                "type": "users",
                "id": "1",
                "attributes": {"email": email},
                "links": {}
            }})
        };
        assert!(shape.validate(&body("james@example.com")).is_ok());
        let err = shape.validate(&body("james")).unwrap_err();
        assert_eq!(err.violations[0].path, "$.data.attributes.email");
    }
}
