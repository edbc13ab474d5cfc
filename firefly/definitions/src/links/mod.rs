//! Link type and transaction link routes.
//!
//! A link type names a relation ("relates to", "refunds"); a transaction
//! link applies one between an inward and an outward transaction journal.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | listLinkType | GET | /v1/link-types |
//! | storeLinkType | POST | /v1/link-types |
//! | getLinkType | GET | /v1/link-types/{id} |
//! | updateLinkType | PUT | /v1/link-types/{id} |
//! | deleteLinkType | DELETE | /v1/link-types/{id} |
//! | listTransactionByLinkType | GET | /v1/link-types/{id}/transactions |
//! | listTransactionLink | GET | /v1/transaction-links |
//! | storeTransactionLink | POST | /v1/transaction-links |
//! | getTransactionLink | GET | /v1/transaction-links/{id} |
//! | updateTransactionLink | PUT | /v1/transaction-links/{id} |
//! | deleteTransactionLink | DELETE | /v1/transaction-links/{id} |

use firefly_define::{ApiRequest, Field, QueryParam, RestMethod, Route, Shape};

use crate::common::{RouteExt, array, maybe_text, read, single, text, timestamped};
use crate::transactions::transaction_array;

const RESOURCE: &str = "links";

/// Attributes of a link type.
pub fn link_type() -> Shape {
    Shape::object(vec![
        Field::new("name", Shape::string()),
        Field::new("inward", Shape::string()),
        Field::new("outward", Shape::string()),
        Field::new("editable", Shape::boolean()).optional(),
    ])
}

fn link_type_update() -> Shape {
    Shape::object(vec![text("name"), text("inward"), text("outward")])
}

fn link_type_read() -> Shape {
    read(link_type(), true)
}

/// Attributes of a transaction link.
pub fn transaction_link() -> Shape {
    timestamped(transaction_link_fields(false))
}

fn transaction_link_fields(update: bool) -> Vec<Field> {
    let id = |name: &str| {
        if update {
            text(name)
        } else {
            Field::new(name, Shape::string())
        }
    };
    vec![
        id("link_type_id"),
        text("link_type_name"),
        id("inward_id"),
        id("outward_id"),
        maybe_text("notes"),
    ]
}

fn transaction_link_read() -> Shape {
    read(transaction_link(), true)
}

pub fn list_link_type() -> Route {
    Route::new("listLinkType", RESOURCE, RestMethod::Get, "/v1/link-types")
        .summary("List all types of links.")
        .paged()
        .reads(array(link_type_read(), true))
        .with_errors()
}

pub fn store_link_type() -> Route {
    Route::new("storeLinkType", RESOURCE, RestMethod::Post, "/v1/link-types")
        .summary("Create a new link type")
        .request(ApiRequest::json(link_type()))
        .reads(single(link_type_read()))
        .with_validation_errors()
}

pub fn get_link_type() -> Route {
    Route::new("getLinkType", RESOURCE, RestMethod::Get, "/v1/link-types/{id}")
        .summary("Get single a link type.")
        .reads(single(link_type_read()))
        .with_errors()
}

pub fn update_link_type() -> Route {
    Route::new("updateLinkType", RESOURCE, RestMethod::Put, "/v1/link-types/{id}")
        .summary("Update existing link type.")
        .request(ApiRequest::json(link_type_update()))
        .reads(single(link_type_read()))
        .with_validation_errors()
}

pub fn delete_link_type() -> Route {
    Route::new("deleteLinkType", RESOURCE, RestMethod::Delete, "/v1/link-types/{id}")
        .summary("Permanently delete link type.")
        .no_content()
        .with_errors()
}

pub fn list_transaction_by_link_type() -> Route {
    Route::new(
        "listTransactionByLinkType",
        RESOURCE,
        RestMethod::Get,
        "/v1/link-types/{id}/transactions",
    )
    .summary("List all transactions under this link type.")
    .paged()
    .query(QueryParam::optional("start"))
    .query(QueryParam::optional("end"))
    .query(QueryParam::optional("type"))
    .reads(transaction_array())
    .with_errors()
}

pub fn list_transaction_link() -> Route {
    Route::new("listTransactionLink", RESOURCE, RestMethod::Get, "/v1/transaction-links")
        .summary("List all transaction links.")
        .paged()
        .reads(array(transaction_link_read(), true))
        .with_errors()
}

pub fn store_transaction_link() -> Route {
    Route::new("storeTransactionLink", RESOURCE, RestMethod::Post, "/v1/transaction-links")
        .summary("Create a new link between transactions")
        .request(ApiRequest::json(Shape::object(transaction_link_fields(false))))
        .reads(single(transaction_link_read()))
        .with_validation_errors()
}

pub fn get_transaction_link() -> Route {
    Route::new(
        "getTransactionLink",
        RESOURCE,
        RestMethod::Get,
        "/v1/transaction-links/{id}",
    )
    .summary("Get a single link.")
    .reads(single(transaction_link_read()))
    .with_errors()
}

pub fn update_transaction_link() -> Route {
    Route::new(
        "updateTransactionLink",
        RESOURCE,
        RestMethod::Put,
        "/v1/transaction-links/{id}",
    )
    .summary("Update an existing link between transactions.")
    .request(ApiRequest::json(Shape::object(transaction_link_fields(true))))
    .reads(single(transaction_link_read()))
    .with_validation_errors()
}

pub fn delete_transaction_link() -> Route {
    Route::new(
        "deleteTransactionLink",
        RESOURCE,
        RestMethod::Delete,
        "/v1/transaction-links/{id}",
    )
    .summary("Permanently delete link between transactions.")
    .no_content()
    .with_errors()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn store_link_needs_both_journals() {
        let Some(ApiRequest::Json(shape)) = store_transaction_link().request else {
            panic!("link store is JSON");
        };
        let err = shape
            .validate(&json!({"link_type_id": "1", "inward_id": "10"}))
            .unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].path, "$.outward_id");
    }

    #[test]
    fn update_link_is_partial() {
        let Some(ApiRequest::Json(shape)) = update_transaction_link().request else {
            panic!("link update is JSON");
        };
        assert!(shape.validate(&json!({"notes": null})).is_ok());
    }

    #[test]
    fn link_type_requires_both_directions() {
        let err = link_type()
            .validate(&json!({"name": "Refund", "inward": "is refunded by"}))
            .unwrap_err();
        assert_eq!(err.violations[0].path, "$.outward");
    }
}
