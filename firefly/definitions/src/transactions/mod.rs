//! Transaction routes.
//!
//! A transaction (group) holds one or more splits; each split moves an
//! amount from a source account to a destination account.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | listTransaction | GET | /v1/transactions |
//! | storeTransaction | POST | /v1/transactions |
//! | getTransaction | GET | /v1/transactions/{id} |
//! | updateTransaction | PUT | /v1/transactions/{id} |
//! | deleteTransaction | DELETE | /v1/transactions/{id} |
//! | listAttachmentByTransaction | GET | /v1/transactions/{id}/attachments |

mod types;

pub use types::{
    Transaction, TransactionSplit, TransactionSplitStore, TransactionStore, TransactionType,
};

use firefly_define::{ApiRequest, Field, QueryParam, RestMethod, Route, Shape};

use crate::accounts::ACCOUNT_TYPES;
use crate::attachments::attachment_array;
use crate::common::{RouteExt, array, maybe_text, read, single, text, timestamped};

const RESOURCE: &str = "transactions";

fn transaction_type() -> Shape {
    Shape::enumeration(["withdrawal", "deposit", "transfer", "reconciliation", "opening balance"])
}

fn nullish(name: &str, shape: Shape) -> Field {
    Field::new(name, shape).nullish()
}

fn split() -> Shape {
    let mut fields = vec![
        text("user"),
        text("transaction_journal_id"),
        Field::new("type", transaction_type()),
        Field::new("date", Shape::date_time()),
        nullish("order", Shape::integer()),
        maybe_text("currency_id"),
        maybe_text("currency_code"),
        text("currency_symbol"),
        text("currency_name"),
        Field::new("currency_decimal_places", Shape::integer()).optional(),
        maybe_text("foreign_currency_id"),
        maybe_text("foreign_currency_code"),
        maybe_text("foreign_currency_symbol"),
        nullish("foreign_currency_decimal_places", Shape::integer()),
        Field::new("amount", Shape::string()),
        maybe_text("foreign_amount"),
        Field::new("description", Shape::string()),
        Field::new("source_id", Shape::string()).nullable(),
        maybe_text("source_name"),
        maybe_text("source_iban"),
        Field::new("source_type", Shape::enumeration(ACCOUNT_TYPES)).optional(),
        Field::new("destination_id", Shape::string()).nullable(),
        maybe_text("destination_name"),
        maybe_text("destination_iban"),
        Field::new("destination_type", Shape::enumeration(ACCOUNT_TYPES)).optional(),
        maybe_text("budget_id"),
        maybe_text("budget_name"),
        maybe_text("category_id"),
        maybe_text("category_name"),
        maybe_text("bill_id"),
        maybe_text("bill_name"),
        Field::new("reconciled", Shape::boolean()).optional(),
        maybe_text("notes"),
        nullish("tags", Shape::array(Shape::string())),
        maybe_text("internal_reference"),
        maybe_text("external_id"),
        maybe_text("external_url"),
    ];
    fields.extend(
        [
            "interest_date",
            "book_date",
            "process_date",
            "due_date",
            "payment_date",
            "invoice_date",
        ]
        .map(|name| nullish(name, Shape::date_time())),
    );
    fields.extend([
        nullish("latitude", Shape::number()),
        nullish("longitude", Shape::number()),
        nullish("zoom_level", Shape::integer()),
        Field::new("has_attachments", Shape::boolean()).optional(),
    ]);
    Shape::object(fields)
}

/// Attributes of a transaction group.
pub fn transaction() -> Shape {
    timestamped(vec![
        text("user"),
        maybe_text("group_title"),
        Field::new("transactions", Shape::array(split())),
    ])
}

fn split_store() -> Shape {
    Shape::object(vec![
        Field::new("type", transaction_type()),
        Field::new("date", Shape::date_time()),
        Field::new("amount", Shape::string()),
        Field::new("description", Shape::string()),
        nullish("order", Shape::integer()),
        maybe_text("currency_id"),
        maybe_text("currency_code"),
        maybe_text("foreign_amount"),
        maybe_text("foreign_currency_id"),
        maybe_text("foreign_currency_code"),
        maybe_text("budget_id"),
        maybe_text("category_id"),
        maybe_text("category_name"),
        maybe_text("source_id"),
        maybe_text("source_name"),
        maybe_text("destination_id"),
        maybe_text("destination_name"),
        Field::new("reconciled", Shape::boolean()).optional(),
        maybe_text("bill_id"),
        nullish("tags", Shape::array(Shape::string())),
        maybe_text("notes"),
    ])
}

fn transaction_store() -> Shape {
    Shape::object(vec![
        Field::new("error_if_duplicate_hash", Shape::boolean()).optional(),
        Field::new("apply_rules", Shape::boolean()).optional(),
        Field::new("fire_webhooks", Shape::boolean()).optional(),
        maybe_text("group_title"),
        Field::new("transactions", Shape::array(split_store())),
    ])
}

fn transaction_update() -> Shape {
    Shape::object(vec![
        Field::new("apply_rules", Shape::boolean()).optional(),
        Field::new("fire_webhooks", Shape::boolean()).optional(),
        maybe_text("group_title"),
        Field::new("transactions", Shape::array(Shape::Any)).optional(),
    ])
}

fn transaction_read() -> Shape {
    read(transaction(), true)
}

/// `{data: [transaction], meta, links}`.
pub fn transaction_array() -> Shape {
    array(transaction_read(), true)
}

pub fn list_transaction() -> Route {
    Route::new("listTransaction", RESOURCE, RestMethod::Get, "/v1/transactions")
        .summary("List all the user's transactions.")
        .paged()
        .query(QueryParam::optional("start"))
        .query(QueryParam::optional("end"))
        .query(QueryParam::optional("type"))
        .reads(transaction_array())
        .with_errors()
}

pub fn store_transaction() -> Route {
    Route::new("storeTransaction", RESOURCE, RestMethod::Post, "/v1/transactions")
        .summary("Store a new transaction")
        .request(ApiRequest::json(transaction_store()))
        .reads(single(transaction_read()))
        .with_validation_errors()
}

pub fn get_transaction() -> Route {
    Route::new("getTransaction", RESOURCE, RestMethod::Get, "/v1/transactions/{id}")
        .summary("Get a single transaction.")
        .reads(single(transaction_read()))
        .with_errors()
}

pub fn update_transaction() -> Route {
    Route::new("updateTransaction", RESOURCE, RestMethod::Put, "/v1/transactions/{id}")
        .summary("Update existing transaction. For more information, see the API documentation.")
        .request(ApiRequest::json(transaction_update()))
        .reads(single(transaction_read()))
        .with_validation_errors()
}

pub fn delete_transaction() -> Route {
    Route::new(
        "deleteTransaction",
        RESOURCE,
        RestMethod::Delete,
        "/v1/transactions/{id}",
    )
    .summary("Delete a transaction.")
    .no_content()
    .with_errors()
}

pub fn list_attachment_by_transaction() -> Route {
    Route::new(
        "listAttachmentByTransaction",
        RESOURCE,
        RestMethod::Get,
        "/v1/transactions/{id}/attachments",
    )
    .summary("Lists all attachments.")
    .paged()
    .reads(attachment_array())
    .with_errors()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store_shape() -> Shape {
        match store_transaction().request {
            Some(ApiRequest::Json(shape)) => shape,
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn store_body_from_form() {
        let body = json!({"transactions": [{
            "type": "withdrawal",
            "amount": "12.50",
            "description": "Groceries",
            "date": "2024-03-01T12:00:00.000Z",
            "source_id": "1",
            "destination_id": "7"
        }]});
        assert!(store_shape().validate(&body).is_ok());
    }

    #[test]
    fn store_rejects_unknown_type_and_bad_date() {
        let body = json!({"transactions": [{
            "type": "refund",
            "amount": "1",
            "description": "x",
            "date": "yesterday"
        }]});
        let err = store_shape().validate(&body).unwrap_err();
        let paths: Vec<_> = err.violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["$.transactions[0].type", "$.transactions[0].date"]);
    }

    #[test]
    fn split_source_id_is_nullable_not_optional() {
        let mut item = json!({
            "type": "deposit",
            "date": "2024-03-01T12:00:00+00:00",
            "amount": "5",
            "description": "Salary",
            "source_id": null,
            "destination_id": "1"
        });
        assert!(split().validate(&item).is_ok());

        item.as_object_mut().unwrap().remove("source_id");
        let err = split().validate(&item).unwrap_err();
        assert_eq!(err.violations[0].path, "$.source_id");
    }

    #[test]
    fn list_is_paged_json_api() {
        let route = list_transaction();
        assert_eq!(route.success_media_type(), Some("application/vnd.api+json"));
        assert!(route.query.iter().any(|q| q.name == "page"));
    }
}
