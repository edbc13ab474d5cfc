//! Bill routes.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | listBill | GET | /v1/bills |
//! | storeBill | POST | /v1/bills |
//! | getBill | GET | /v1/bills/{id} |
//! | updateBill | PUT | /v1/bills/{id} |
//! | deleteBill | DELETE | /v1/bills/{id} |
//! | listAttachmentByBill | GET | /v1/bills/{id}/attachments |
//! | listRuleByBill | GET | /v1/bills/{id}/rules |
//! | listTransactionByBill | GET | /v1/bills/{id}/transactions |

use firefly_define::{ApiRequest, Field, QueryParam, RestMethod, Route, Shape};

use crate::attachments::attachment_array;
use crate::common::{RouteExt, array, maybe_text, read, single, text, timestamped};
use crate::rules::rule_array;
use crate::transactions::transaction_array;

const RESOURCE: &str = "bills";

fn repeat_freq() -> Shape {
    Shape::enumeration(["weekly", "monthly", "quarterly", "half-year", "yearly"])
}

fn moment(name: &str) -> Field {
    Field::new(name, Shape::date_time()).nullish()
}

fn paid_date() -> Shape {
    Shape::object(vec![
        text("transaction_group_id"),
        text("transaction_journal_id"),
        Field::new("date", Shape::date_time()).optional(),
    ])
}

/// Attributes of a bill.
pub fn bill() -> Shape {
    timestamped(vec![
        text("currency_id"),
        text("currency_code"),
        text("currency_symbol"),
        Field::new("currency_decimal_places", Shape::integer()).optional(),
        Field::new("name", Shape::string()),
        Field::new("amount_min", Shape::string()),
        Field::new("amount_max", Shape::string()),
        Field::new("date", Shape::date_time()),
        moment("end_date"),
        moment("extension_date"),
        Field::new("repeat_freq", repeat_freq()),
        Field::new("skip", Shape::integer()).optional(),
        Field::new("active", Shape::boolean()).optional(),
        Field::new("order", Shape::integer()).optional(),
        maybe_text("notes"),
        moment("next_expected_match"),
        maybe_text("next_expected_match_diff"),
        maybe_text("object_group_id"),
        Field::new("object_group_order", Shape::integer()).nullish(),
        maybe_text("object_group_title"),
        Field::new("pay_dates", Shape::array(Shape::date_time())).optional(),
        Field::new("paid_dates", Shape::array(paid_date())).optional(),
    ])
}

/// Store and update bodies. On update only `name` stays required.
fn bill_write(update: bool) -> Shape {
    let required = |field: Field| if update { field.optional() } else { field };
    Shape::object(vec![
        text("currency_id"),
        text("currency_code"),
        Field::new("name", Shape::string()),
        required(Field::new("amount_min", Shape::string())),
        required(Field::new("amount_max", Shape::string())),
        required(Field::new("date", Shape::date_time())),
        Field::new("end_date", Shape::date_time()).optional(),
        Field::new("extension_date", Shape::date_time()).optional(),
        required(Field::new("repeat_freq", repeat_freq())),
        Field::new("skip", Shape::integer()).optional(),
        Field::new("active", Shape::boolean()).optional(),
        maybe_text("notes"),
        maybe_text("object_group_id"),
        maybe_text("object_group_title"),
    ])
}

fn bill_read() -> Shape {
    read(bill(), false)
}

fn window(route: Route) -> Route {
    route
        .query(QueryParam::optional("start"))
        .query(QueryParam::optional("end"))
}

pub fn list_bill() -> Route {
    window(
        Route::new("listBill", RESOURCE, RestMethod::Get, "/v1/bills")
            .summary("List all bills.")
            .paged(),
    )
    .reads(array(bill_read(), false))
    .with_errors()
}

pub fn store_bill() -> Route {
    Route::new("storeBill", RESOURCE, RestMethod::Post, "/v1/bills")
        .summary("Store a bill")
        .request(ApiRequest::json(bill_write(false)))
        .reads(single(bill_read()))
        .with_validation_errors()
}

pub fn get_bill() -> Route {
    window(
        Route::new("getBill", RESOURCE, RestMethod::Get, "/v1/bills/{id}")
            .summary("Get a single bill."),
    )
    .reads(single(bill_read()))
    .with_errors()
}

pub fn update_bill() -> Route {
    Route::new("updateBill", RESOURCE, RestMethod::Put, "/v1/bills/{id}")
        .summary("Update existing bill.")
        .request(ApiRequest::json(bill_write(true)))
        .reads(single(bill_read()))
        .with_validation_errors()
}

pub fn delete_bill() -> Route {
    Route::new("deleteBill", RESOURCE, RestMethod::Delete, "/v1/bills/{id}")
        .summary("Delete a bill.")
        .no_content()
        .with_errors()
}

pub fn list_attachment_by_bill() -> Route {
    Route::new(
        "listAttachmentByBill",
        RESOURCE,
        RestMethod::Get,
        "/v1/bills/{id}/attachments",
    )
    .summary("List all attachments uploaded to the bill.")
    .paged()
    .reads(attachment_array())
    .with_errors()
}

pub fn list_rule_by_bill() -> Route {
    Route::new("listRuleByBill", RESOURCE, RestMethod::Get, "/v1/bills/{id}/rules")
        .summary("List all rules associated with the bill.")
        .reads(rule_array())
        .with_errors()
}

pub fn list_transaction_by_bill() -> Route {
    window(
        Route::new(
            "listTransactionByBill",
            RESOURCE,
            RestMethod::Get,
            "/v1/bills/{id}/transactions",
        )
        .summary("List all transactions associated with the bill.")
        .paged(),
    )
    .query(QueryParam::optional("type"))
    .reads(transaction_array())
    .with_errors()
}
