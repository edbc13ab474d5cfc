//! Recurring transaction routes.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | listRecurrence | GET | /v1/recurrences |
//! | storeRecurrence | POST | /v1/recurrences |
//! | getRecurrence | GET | /v1/recurrences/{id} |
//! | updateRecurrence | PUT | /v1/recurrences/{id} |
//! | deleteRecurrence | DELETE | /v1/recurrences/{id} |
//! | listTransactionByRecurrence | GET | /v1/recurrences/{id}/transactions |

use firefly_define::{ApiRequest, Field, QueryParam, RestMethod, Route, Shape};

use crate::accounts::ACCOUNT_TYPES;
use crate::common::{RouteExt, array, maybe_text, read, single, text, timestamped};
use crate::transactions::transaction_array;

const RESOURCE: &str = "recurrences";

fn transaction_kind() -> Shape {
    Shape::enumeration(["withdrawal", "transfer", "deposit"])
}

fn repetition_kind() -> Shape {
    Shape::enumeration(["daily", "weekly", "ndom", "monthly", "yearly"])
}

fn integer(name: &str) -> Field {
    Field::new(name, Shape::integer()).optional()
}

fn repetition() -> Shape {
    timestamped(vec![
        text("id"),
        Field::new("type", repetition_kind()),
        Field::new("moment", Shape::string()),
        integer("skip"),
        integer("weekend"),
        text("description"),
        Field::new("occurrences", Shape::array(Shape::date_time())).optional(),
    ])
}

fn scheduled_transaction() -> Shape {
    let mut fields = vec![
        text("id"),
        Field::new("description", Shape::string()),
        Field::new("amount", Shape::string()),
        maybe_text("foreign_amount"),
        text("currency_id"),
        text("currency_code"),
        text("currency_symbol"),
        integer("currency_decimal_places"),
        maybe_text("foreign_currency_id"),
        maybe_text("foreign_currency_code"),
        maybe_text("foreign_currency_symbol"),
        Field::new("foreign_currency_decimal_places", Shape::integer()).nullish(),
        text("budget_id"),
        maybe_text("budget_name"),
        text("category_id"),
        text("category_name"),
    ];
    for side in ["source", "destination"] {
        fields.push(text(&format!("{side}_id")));
        fields.push(text(&format!("{side}_name")));
        fields.push(maybe_text(&format!("{side}_iban")));
        fields.push(
            Field::new(format!("{side}_type"), Shape::enumeration(ACCOUNT_TYPES)).optional(),
        );
    }
    fields.extend([
        Field::new("tags", Shape::array(Shape::string())).nullish(),
        maybe_text("piggy_bank_id"),
        maybe_text("piggy_bank_name"),
        maybe_text("bill_id"),
        maybe_text("bill_name"),
    ]);
    Shape::object(fields)
}

/// Attributes of a recurrence.
pub fn recurrence() -> Shape {
    timestamped(vec![
        Field::new("type", transaction_kind()).optional(),
        text("title"),
        text("description"),
        text("first_date"),
        maybe_text("latest_date"),
        maybe_text("repeat_until"),
        Field::new("nr_of_repetitions", Shape::integer()).nullish(),
        Field::new("apply_rules", Shape::boolean()).optional(),
        Field::new("active", Shape::boolean()).optional(),
        maybe_text("notes"),
        Field::new("repetitions", Shape::array(repetition())).optional(),
        Field::new("transactions", Shape::array(scheduled_transaction())).optional(),
    ])
}

fn recurrence_store() -> Shape {
    let repetition = Shape::object(vec![
        Field::new("type", repetition_kind()),
        Field::new("moment", Shape::string()),
        integer("skip"),
        integer("weekend"),
    ]);
    let transaction = Shape::object(vec![
        Field::new("description", Shape::string()),
        Field::new("amount", Shape::string()),
        maybe_text("foreign_amount"),
        text("currency_id"),
        text("currency_code"),
        maybe_text("foreign_currency_id"),
        maybe_text("foreign_currency_code"),
        text("budget_id"),
        text("category_id"),
        Field::new("source_id", Shape::string()),
        Field::new("destination_id", Shape::string()),
        Field::new("tags", Shape::array(Shape::string())).nullish(),
        maybe_text("piggy_bank_id"),
        maybe_text("bill_id"),
    ]);
    Shape::object(vec![
        Field::new("type", transaction_kind()),
        Field::new("title", Shape::string()),
        text("description"),
        Field::new("first_date", Shape::string()),
        Field::new("repeat_until", Shape::string()).nullable(),
        Field::new("nr_of_repetitions", Shape::integer()).nullish(),
        Field::new("apply_rules", Shape::boolean()).optional(),
        Field::new("active", Shape::boolean()).optional(),
        maybe_text("notes"),
        Field::new("repetitions", Shape::array(repetition)),
        Field::new("transactions", Shape::array(transaction)),
    ])
}

fn recurrence_update() -> Shape {
    let repetition = Shape::object(vec![
        Field::new("type", repetition_kind()).optional(),
        text("moment"),
        integer("skip"),
        integer("weekend"),
    ]);
    // Existing transactions are addressed by id.
    let transaction = Shape::object(vec![
        Field::new("id", Shape::string()),
        text("description"),
        text("amount"),
        maybe_text("foreign_amount"),
        text("currency_id"),
        text("currency_code"),
        maybe_text("foreign_currency_id"),
        text("budget_id"),
        text("category_id"),
        text("source_id"),
        text("destination_id"),
        Field::new("tags", Shape::array(Shape::string())).nullish(),
        maybe_text("piggy_bank_id"),
        maybe_text("bill_id"),
    ]);
    Shape::object(vec![
        text("title"),
        text("description"),
        text("first_date"),
        maybe_text("repeat_until"),
        Field::new("nr_of_repetitions", Shape::integer()).nullish(),
        Field::new("apply_rules", Shape::boolean()).optional(),
        Field::new("active", Shape::boolean()).optional(),
        maybe_text("notes"),
        Field::new("repetitions", Shape::array(repetition)).optional(),
        Field::new("transactions", Shape::array(transaction)).optional(),
    ])
}

fn recurrence_read() -> Shape {
    read(recurrence(), true)
}

pub fn list_recurrence() -> Route {
    Route::new("listRecurrence", RESOURCE, RestMethod::Get, "/v1/recurrences")
        .summary("List all recurring transactions.")
        .paged()
        .reads(array(recurrence_read(), true))
        .with_errors()
}

pub fn store_recurrence() -> Route {
    Route::new("storeRecurrence", RESOURCE, RestMethod::Post, "/v1/recurrences")
        .summary("Store a new recurring transaction")
        .request(ApiRequest::json(recurrence_store()))
        .reads(single(recurrence_read()))
        .with_validation_errors()
}

pub fn get_recurrence() -> Route {
    Route::new("getRecurrence", RESOURCE, RestMethod::Get, "/v1/recurrences/{id}")
        .summary("Get a single recurring transaction.")
        .reads(single(recurrence_read()))
        .with_errors()
}

pub fn update_recurrence() -> Route {
    Route::new("updateRecurrence", RESOURCE, RestMethod::Put, "/v1/recurrences/{id}")
        .summary("Update existing recurring transaction.")
        .request(ApiRequest::json(recurrence_update()))
        .reads(single(recurrence_read()))
        .with_validation_errors()
}

pub fn delete_recurrence() -> Route {
    Route::new("deleteRecurrence", RESOURCE, RestMethod::Delete, "/v1/recurrences/{id}")
        .summary("Delete a recurring transaction.")
        .no_content()
        .with_errors()
}

pub fn list_transaction_by_recurrence() -> Route {
    Route::new(
        "listTransactionByRecurrence",
        RESOURCE,
        RestMethod::Get,
        "/v1/recurrences/{id}/transactions",
    )
    .summary("List all transactions created by a recurring transaction.")
    .paged()
    .query(QueryParam::optional("start"))
    .query(QueryParam::optional("end"))
    .query(QueryParam::optional("type"))
    .reads(transaction_array())
    .with_errors()
}
