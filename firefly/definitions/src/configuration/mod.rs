//! System configuration routes.
//!
//! Configuration values are updated with URL-encoded forms, not JSON. The
//! listing is also declared with the form media type, so its body is never
//! checked against a shape; the server answers it with JSON regardless.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | getConfiguration | GET | /v1/configuration |
//! | getSingleConfiguration | GET | /v1/configuration/{name} |
//! | setConfiguration | PUT | /v1/configuration/{name} |

use firefly_define::{ApiRequest, ApiResponse, Field, FormField, RestMethod, Route, Shape};

use crate::common::{RouteExt, polymorphic};

const RESOURCE: &str = "configuration";

/// Names accepted by `getSingleConfiguration`.
pub const CONFIG_NAMES: [&str; 19] = [
    "configuration.is_demo_site",
    "configuration.permission_update_check",
    "configuration.last_update_check",
    "configuration.single_user_mode",
    "firefly.version",
    "firefly.api_version",
    "firefly.default_location",
    "firefly.account_to_transaction",
    "firefly.allowed_opposing_types",
    "firefly.accountRoles",
    "firefly.valid_liabilities",
    "firefly.interest_periods",
    "firefly.enable_external_map",
    "firefly.expected_source_types",
    "app.timezone",
    "firefly.bill_periods",
    "firefly.credit_card_types",
    "firefly.languages",
    "firefly.valid_view_ranges",
];

/// Names that `setConfiguration` may change.
pub const EDITABLE_NAMES: [&str; 4] = [
    "configuration.is_demo_site",
    "configuration.permission_update_check",
    "configuration.last_update_check",
    "configuration.single_user_mode",
];

fn configuration() -> Shape {
    Shape::object(vec![
        Field::new("title", Shape::enumeration(CONFIG_NAMES)),
        Field::new("value", polymorphic()),
        Field::new("editable", Shape::boolean()),
    ])
}

fn configuration_single() -> Shape {
    Shape::object(vec![Field::new("data", configuration())])
}

pub fn get_configuration() -> Route {
    Route::new("getConfiguration", RESOURCE, RestMethod::Get, "/v1/configuration")
        .summary("Get Firefly III system configuration values.")
        .respond(200, ApiResponse::text(firefly_define::request::FORM_URLENCODED))
        .with_errors()
}

pub fn get_single_configuration() -> Route {
    Route::new(
        "getSingleConfiguration",
        RESOURCE,
        RestMethod::Get,
        "/v1/configuration/{name}",
    )
    .summary("Get a single Firefly III system configuration value")
    .respond(200, ApiResponse::json(configuration_single()))
    .with_errors()
}

pub fn set_configuration() -> Route {
    Route::new(
        "setConfiguration",
        RESOURCE,
        RestMethod::Put,
        "/v1/configuration/{name}",
    )
    .summary("Update configuration value")
    .request(ApiRequest::url_encoded(vec![
        FormField::text("value").with_description("New value; booleans as `true`/`false`"),
    ]))
    .respond(200, ApiResponse::json(configuration_single()))
    .with_validation_errors()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_configuration_is_form_encoded() {
        let route = set_configuration();
        assert!(route.request.as_ref().is_some_and(ApiRequest::is_url_encoded));
        assert_eq!(
            route.request.as_ref().map(ApiRequest::content_type),
            Some("application/x-www-form-urlencoded")
        );
    }

    #[test]
    fn listing_declares_no_shape() {
        let route = get_configuration();
        assert!(route.responses.get(200).and_then(ApiResponse::shape).is_none());
    }

    #[test]
    fn single_configuration_value_is_polymorphic() {
        let shape = configuration_single();
        for value in [json!(true), json!("UTC"), json!(["en_US"]), json!({"lat": 1})] {
            let body = json!({
                "data": {"title": "app.timezone", "value": value, "editable": false}
            });
            assert!(shape.validate(&body).is_ok());
        }
        let unknown = json!({"data": {"title": "app.name", "value": "x", "editable": false}});
        assert!(shape.validate(&unknown).is_err());
    }

    #[test]
    fn editable_names_are_known() {
        assert!(EDITABLE_NAMES.iter().all(|name| CONFIG_NAMES.contains(name)));
    }
}
