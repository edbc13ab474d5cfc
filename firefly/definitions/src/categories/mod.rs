//! Category routes.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | listCategory | GET | /v1/categories |
//! | storeCategory | POST | /v1/categories |
//! | getCategory | GET | /v1/categories/{id} |
//! | updateCategory | PUT | /v1/categories/{id} |
//! | deleteCategory | DELETE | /v1/categories/{id} |
//! | listTransactionByCategory | GET | /v1/categories/{id}/transactions |

use firefly_define::{ApiRequest, Field, QueryParam, RestMethod, Route, Shape};

use crate::common::{RouteExt, array, maybe_text, read, single, text, timestamped};
use crate::transactions::transaction_array;

const RESOURCE: &str = "categories";

fn sum() -> Shape {
    Shape::object(vec![
        text("currency_id"),
        text("currency_code"),
        text("currency_symbol"),
        Field::new("currency_decimal_places", Shape::integer()).optional(),
        text("sum"),
    ])
}

/// Attributes of a category.
pub fn category() -> Shape {
    timestamped(vec![
        Field::new("name", Shape::string()),
        maybe_text("notes"),
        Field::new("spent", Shape::array(sum())).optional(),
        Field::new("earned", Shape::array(sum())).optional(),
    ])
}

fn category_update() -> Shape {
    Shape::object(vec![text("name"), maybe_text("notes")])
}

fn category_read() -> Shape {
    read(category(), false)
}

pub fn list_category() -> Route {
    Route::new("listCategory", RESOURCE, RestMethod::Get, "/v1/categories")
        .summary("List all categories.")
        .paged()
        .reads(array(category_read(), false))
        .with_errors()
}

pub fn store_category() -> Route {
    Route::new("storeCategory", RESOURCE, RestMethod::Post, "/v1/categories")
        .summary("Store a new category")
        .request(ApiRequest::json(category()))
        .reads(single(category_read()))
        .with_validation_errors()
}

pub fn get_category() -> Route {
    Route::new("getCategory", RESOURCE, RestMethod::Get, "/v1/categories/{id}")
        .summary("Get a single category.")
        .query(QueryParam::optional("start"))
        .query(QueryParam::optional("end"))
        .reads(single(category_read()))
        .with_errors()
}

pub fn update_category() -> Route {
    Route::new("updateCategory", RESOURCE, RestMethod::Put, "/v1/categories/{id}")
        .summary("Update existing category.")
        .request(ApiRequest::json(category_update()))
        .reads(single(category_read()))
        .with_validation_errors()
}

pub fn delete_category() -> Route {
    Route::new("deleteCategory", RESOURCE, RestMethod::Delete, "/v1/categories/{id}")
        .summary("Delete a category.")
        .no_content()
        .with_errors()
}

pub fn list_transaction_by_category() -> Route {
    Route::new(
        "listTransactionByCategory",
        RESOURCE,
        RestMethod::Get,
        "/v1/categories/{id}/transactions",
    )
    .summary("List all transactions in a category.")
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
    fn category_spent_entries_are_checked() {
        let ok = json!({"name": "Groceries", "spent": [{"currency_code": "EUR", "sum": "-12.00"}]});
        assert!(category().validate(&ok).is_ok());

        let bad = json!({"name": "Groceries", "spent": [{"currency_decimal_places": "two"}]});
        let err = category().validate(&bad).unwrap_err();
        assert_eq!(err.violations[0].path, "$.spent[0].currency_decimal_places");
    }

    #[test]
    fn store_category_requires_name() {
        let Some(ApiRequest::Json(shape)) = store_category().request else {
            panic!("category store is JSON");
        };
        assert!(shape.validate(&json!({"notes": "x"})).is_err());
    }
}
