//! Piggy bank routes.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | listPiggyBank | GET | /v1/piggy-banks |
//! | storePiggyBank | POST | /v1/piggy-banks |
//! | getPiggyBank | GET | /v1/piggy-banks/{id} |
//! | updatePiggyBank | PUT | /v1/piggy-banks/{id} |
//! | deletePiggyBank | DELETE | /v1/piggy-banks/{id} |
//! | listEventByPiggyBank | GET | /v1/piggy-banks/{id}/events |
//! | listAttachmentByPiggyBank | GET | /v1/piggy-banks/{id}/attachments |

use firefly_define::{ApiRequest, Field, RestMethod, Route, Shape};

use crate::attachments::attachment_array;
use crate::common::{RouteExt, array, maybe_text, read, single, text, timestamped};

const RESOURCE: &str = "piggy_banks";

fn currency() -> Vec<Field> {
    vec![
        text("currency_id"),
        text("currency_code"),
        text("currency_symbol"),
        Field::new("currency_decimal_places", Shape::integer()).optional(),
    ]
}

fn object_group() -> Vec<Field> {
    vec![maybe_text("object_group_id"), maybe_text("object_group_title")]
}

/// Attributes of a piggy bank.
pub fn piggy_bank() -> Shape {
    let mut fields = vec![
        Field::new("account_id", Shape::string()),
        text("account_name"),
        Field::new("name", Shape::string()),
    ];
    fields.extend(currency());
    fields.extend([
        Field::new("target_amount", Shape::string()).nullable(),
        Field::new("percentage", Shape::number()).nullish(),
        text("current_amount"),
        maybe_text("left_to_save"),
        maybe_text("save_per_month"),
        text("start_date"),
        maybe_text("target_date"),
        Field::new("order", Shape::integer()).optional(),
        Field::new("active", Shape::boolean()).optional(),
        maybe_text("notes"),
        Field::new("object_group_order", Shape::integer()).nullish(),
    ]);
    fields.extend(object_group());
    timestamped(fields)
}

fn piggy_bank_event() -> Shape {
    let mut fields = currency();
    fields.extend([
        text("amount"),
        maybe_text("transaction_journal_id"),
        maybe_text("transaction_group_id"),
    ]);
    timestamped(fields)
}

fn piggy_bank_store() -> Shape {
    let mut fields = vec![
        Field::new("name", Shape::string()),
        Field::new("account_id", Shape::string()),
        Field::new("target_amount", Shape::string()).nullable(),
    ];
    fields.extend(savings());
    Shape::object(fields)
}

fn piggy_bank_update() -> Shape {
    let mut fields = vec![
        text("name"),
        text("account_id"),
        text("currency_id"),
        text("currency_code"),
        maybe_text("target_amount"),
    ];
    fields.extend(savings());
    Shape::object(fields)
}

// Fields that store and update accept identically.
fn savings() -> Vec<Field> {
    let mut fields = vec![
        text("current_amount"),
        text("start_date"),
        maybe_text("target_date"),
        Field::new("order", Shape::integer()).optional(),
        Field::new("active", Shape::boolean()).optional(),
        maybe_text("notes"),
    ];
    fields.extend(object_group());
    fields
}

fn piggy_bank_read() -> Shape {
    read(piggy_bank(), true)
}

pub fn list_piggy_bank() -> Route {
    Route::new("listPiggyBank", RESOURCE, RestMethod::Get, "/v1/piggy-banks")
        .summary("List all piggy banks.")
        .paged()
        .reads(array(piggy_bank_read(), true))
        .with_errors()
}

pub fn store_piggy_bank() -> Route {
    Route::new("storePiggyBank", RESOURCE, RestMethod::Post, "/v1/piggy-banks")
        .summary("Store a new piggy bank")
        .request(ApiRequest::json(piggy_bank_store()))
        .reads(single(piggy_bank_read()))
        .with_validation_errors()
}

pub fn get_piggy_bank() -> Route {
    Route::new("getPiggyBank", RESOURCE, RestMethod::Get, "/v1/piggy-banks/{id}")
        .summary("Get a single piggy bank.")
        .reads(single(piggy_bank_read()))
        .with_errors()
}

pub fn update_piggy_bank() -> Route {
    Route::new("updatePiggyBank", RESOURCE, RestMethod::Put, "/v1/piggy-banks/{id}")
        .summary("Update existing piggy bank.")
        .request(ApiRequest::json(piggy_bank_update()))
        .reads(single(piggy_bank_read()))
        .with_validation_errors()
}

pub fn delete_piggy_bank() -> Route {
    Route::new("deletePiggyBank", RESOURCE, RestMethod::Delete, "/v1/piggy-banks/{id}")
        .summary("Delete a piggy bank.")
        .no_content()
        .with_errors()
}

pub fn list_event_by_piggy_bank() -> Route {
    Route::new(
        "listEventByPiggyBank",
        RESOURCE,
        RestMethod::Get,
        "/v1/piggy-banks/{id}/events",
    )
    .summary("List all events linked to a piggy bank.")
    .paged()
    .reads(array(read(piggy_bank_event(), true), true))
    .with_errors()
}

pub fn list_attachment_by_piggy_bank() -> Route {
    Route::new(
        "listAttachmentByPiggyBank",
        RESOURCE,
        RestMethod::Get,
        "/v1/piggy-banks/{id}/attachments",
    )
    .summary("Lists all attachments.")
    .paged()
    .reads(attachment_array())
    .with_errors()
}
