//! Tag routes.
//!
//! Tags are addressed by id or by the tag text itself.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | listTag | GET | /v1/tags |
//! | storeTag | POST | /v1/tags |
//! | getTag | GET | /v1/tags/{tag} |
//! | updateTag | PUT | /v1/tags/{tag} |
//! | deleteTag | DELETE | /v1/tags/{tag} |
//! | listTransactionByTag | GET | /v1/tags/{tag}/transactions |

use firefly_define::{ApiRequest, Field, QueryParam, RestMethod, Route, Shape};

use crate::common::{RouteExt, array, maybe_text, read, single, text, timestamped};
use crate::transactions::transaction_array;

const RESOURCE: &str = "tags";

fn tag_fields(tag: Field) -> Vec<Field> {
    vec![
        tag,
        maybe_text("date"),
        maybe_text("description"),
        Field::new("latitude", Shape::number()).nullish(),
        Field::new("longitude", Shape::number()).nullish(),
        Field::new("zoom_level", Shape::integer()).nullish(),
    ]
}

/// Attributes of a tag.
pub fn tag() -> Shape {
    timestamped(tag_fields(Field::new("tag", Shape::string())))
}

fn tag_read() -> Shape {
    read(tag(), true)
}

pub fn list_tag() -> Route {
    Route::new("listTag", RESOURCE, RestMethod::Get, "/v1/tags")
        .summary("List all tags.")
        .paged()
        .reads(array(tag_read(), true))
        .with_errors()
}

pub fn store_tag() -> Route {
    Route::new("storeTag", RESOURCE, RestMethod::Post, "/v1/tags")
        .summary("Store a new tag")
        .request(ApiRequest::json(Shape::object(tag_fields(Field::new(
            "tag",
            Shape::string(),
        )))))
        .reads(single(tag_read()))
        .with_validation_errors()
}

pub fn get_tag() -> Route {
    Route::new("getTag", RESOURCE, RestMethod::Get, "/v1/tags/{tag}")
        .summary("Get a single tag.")
        .paged()
        .reads(single(tag_read()))
        .with_errors()
}

pub fn update_tag() -> Route {
    Route::new("updateTag", RESOURCE, RestMethod::Put, "/v1/tags/{tag}")
        .summary("Update existing tag.")
        .request(ApiRequest::json(Shape::object(tag_fields(text("tag")))))
        .reads(single(tag_read()))
        .with_validation_errors()
}

pub fn delete_tag() -> Route {
    Route::new("deleteTag", RESOURCE, RestMethod::Delete, "/v1/tags/{tag}")
        .summary("Delete an tag.")
        .no_content()
        .with_errors()
}

pub fn list_transaction_by_tag() -> Route {
    Route::new(
        "listTransactionByTag",
        RESOURCE,
        RestMethod::Get,
        "/v1/tags/{tag}/transactions",
    )
    .summary("List all transactions with this tag.")
    .paged()
    .query(QueryParam::optional("start"))
    .query(QueryParam::optional("end"))
    .query(QueryParam::optional("type"))
    .reads(transaction_array())
    .with_errors()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tag_read_requires_links() {
        let body = json!({"type": "tags", "id": "1", "attributes": {"tag": "holiday"}});
        let err = tag_read().validate(&body).unwrap_err();
        assert_eq!(err.violations[0].path, "$.links");
    }

    #[test]
    fn update_tag_allows_partial_body() {
        let Some(ApiRequest::Json(shape)) = update_tag().request else {
            panic!("tag update is JSON");
        };
        assert!(shape.validate(&json!({"description": "Summer"})).is_ok());
    }
}
