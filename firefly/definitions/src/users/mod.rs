//! User management routes. These need the owner role on the server.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | listUser | GET | /v1/users |
//! | storeUser | POST | /v1/users |
//! | getUser | GET | /v1/users/{id} |
//! | updateUser | PUT | /v1/users/{id} |
//! | deleteUser | DELETE | /v1/users/{id} |

use firefly_define::{ApiRequest, Field, RestMethod, Route, Shape};

use crate::common::{RouteExt, array, read, single, timestamped};

const RESOURCE: &str = "users";

/// Attributes of a user. Store and update send the same object.
pub fn user() -> Shape {
    timestamped(vec![
        Field::new("email", Shape::email()),
        Field::new("blocked", Shape::boolean()).optional(),
        Field::new("blocked_code", Shape::enumeration(["email_changed", "null"])).nullish(),
        Field::new("role", Shape::enumeration(["owner", "demo", "null"])).nullish(),
    ])
}

fn user_read() -> Shape {
    read(user(), true)
}

pub fn list_user() -> Route {
    Route::new("listUser", RESOURCE, RestMethod::Get, "/v1/users")
        .summary("List all users.")
        .paged()
        .reads(array(user_read(), true))
        .with_errors()
}

pub fn store_user() -> Route {
    Route::new("storeUser", RESOURCE, RestMethod::Post, "/v1/users")
        .summary("Store a new user")
        .request(ApiRequest::json(user()))
        .reads(single(user_read()))
        .with_validation_errors()
}

pub fn get_user() -> Route {
    Route::new("getUser", RESOURCE, RestMethod::Get, "/v1/users/{id}")
        .summary("Get a single user.")
        .reads(single(user_read()))
        .with_errors()
}

pub fn update_user() -> Route {
    Route::new("updateUser", RESOURCE, RestMethod::Put, "/v1/users/{id}")
        .summary("Update an existing user's information.")
        .request(ApiRequest::json(user()))
        .reads(single(user_read()))
        .with_validation_errors()
}

pub fn delete_user() -> Route {
    Route::new("deleteUser", RESOURCE, RestMethod::Delete, "/v1/users/{id}")
        .summary("Delete a user.")
        .no_content()
        .with_errors()
}
