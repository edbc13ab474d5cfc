//! User preference routes.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | listPreference | GET | /v1/preferences |
//! | storePreference | POST | /v1/preferences |
//! | getPreference | GET | /v1/preferences/{name} |
//! | updatePreference | PUT | /v1/preferences/{name} |

use firefly_define::{ApiRequest, Field, RestMethod, Route, Shape};

use crate::common::{RouteExt, array, polymorphic, read, single, timestamped};

const RESOURCE: &str = "preferences";

/// Attributes of a preference.
pub fn preference() -> Shape {
    timestamped(vec![
        Field::new("name", Shape::string()),
        Field::new("data", polymorphic()),
    ])
}

fn preference_read() -> Shape {
    read(preference(), false)
}

pub fn list_preference() -> Route {
    Route::new("listPreference", RESOURCE, RestMethod::Get, "/v1/preferences")
        .summary("List all users preferences.")
        .paged()
        .reads(array(preference_read(), true))
        .with_errors()
}

pub fn store_preference() -> Route {
    Route::new("storePreference", RESOURCE, RestMethod::Post, "/v1/preferences")
        .summary("Store a new preference for this user.")
        .request(ApiRequest::json(preference()))
        .reads(single(preference_read()))
        .with_validation_errors()
}

pub fn get_preference() -> Route {
    Route::new("getPreference", RESOURCE, RestMethod::Get, "/v1/preferences/{name}")
        .summary("Return a single preference.")
        .reads(single(preference_read()))
        .with_errors()
}

pub fn update_preference() -> Route {
    Route::new("updatePreference", RESOURCE, RestMethod::Put, "/v1/preferences/{name}")
        .summary("Update preference")
        .request(ApiRequest::json(Shape::object(vec![Field::new(
            "data",
            polymorphic(),
        )])))
        .reads(single(preference_read()))
        .with_validation_errors()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preference_data_may_be_a_list() {
        let body = json!({"name": "frontpageAccounts", "data": ["1", "2"]});
        assert!(preference().validate(&body).is_ok());
    }

    #[test]
    fn preference_data_rejects_numbers() {
        let err = preference()
            .validate(&json!({"name": "listPageSize", "data": 50}))
            .unwrap_err();
        assert_eq!(err.violations[0].path, "$.data");
    }
}
