//! Webhook routes, including delivery messages and attempts.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | listWebhook | GET | /v1/webhooks |
//! | storeWebhook | POST | /v1/webhooks |
//! | getWebhook | GET | /v1/webhooks/{id} |
//! | updateWebhook | PUT | /v1/webhooks/{id} |
//! | deleteWebhook | DELETE | /v1/webhooks/{id} |
//! | submitWebhook | POST | /v1/webhooks/{id}/submit |
//! | triggerTransactionWebhook | POST | /v1/webhooks/{id}/trigger-transaction/{transactionId} |
//! | getWebhookMessages | GET | /v1/webhooks/{id}/messages |
//! | getSingleWebhookMessage | GET | /v1/webhooks/{id}/messages/{messageId} |
//! | deleteWebhookMessage | DELETE | /v1/webhooks/{id}/messages/{messageId} |
//! | getWebhookMessageAttempts | GET | /v1/webhooks/{id}/messages/{messageId}/attempts |
//! | getSingleWebhookMessageAttempt | GET | /v1/webhooks/{id}/messages/{messageId}/attempts/{attemptId} |
//! | deleteWebhookMessageAttempt | DELETE | /v1/webhooks/{id}/messages/{messageId}/attempts/{attemptId} |

use firefly_define::{ApiRequest, ApiResponse, Field, RestMethod, Route, Shape};

use crate::common::{RouteExt, array, maybe_text, read, single, text, timestamped};

const RESOURCE: &str = "webhooks";

const MESSAGE: &str = "/v1/webhooks/{id}/messages/{messageId}";
const ATTEMPT: &str = "/v1/webhooks/{id}/messages/{messageId}/attempts/{attemptId}";

fn trigger() -> Shape {
    Shape::enumeration(["STORE_TRANSACTION", "UPDATE_TRANSACTION", "DESTROY_TRANSACTION"])
}

fn response() -> Shape {
    Shape::enumeration(["TRANSACTIONS", "ACCOUNTS", "NONE"])
}

fn delivery() -> Shape {
    Shape::enumeration(["JSON"])
}

/// Attributes of a webhook.
pub fn webhook() -> Shape {
    timestamped(vec![
        Field::new("active", Shape::boolean()).optional(),
        Field::new("title", Shape::string()),
        text("secret"),
        Field::new("trigger", trigger()),
        Field::new("response", response()),
        Field::new("delivery", delivery()),
        Field::new("url", Shape::string()),
    ])
}

fn webhook_store() -> Shape {
    Shape::object(vec![
        Field::new("active", Shape::boolean()).optional(),
        Field::new("title", Shape::string()),
        Field::new("trigger", trigger()),
        Field::new("response", response()),
        Field::new("delivery", delivery()),
        Field::new("url", Shape::string()),
    ])
}

fn webhook_update() -> Shape {
    Shape::object(vec![
        Field::new("active", Shape::boolean()).optional(),
        text("title"),
        text("secret"),
        Field::new("trigger", trigger()).optional(),
        Field::new("response", response()).optional(),
        Field::new("delivery", delivery()).optional(),
        text("url"),
    ])
}

fn message() -> Shape {
    timestamped(vec![
        Field::new("sent", Shape::boolean()).optional(),
        Field::new("errored", Shape::boolean()).optional(),
        text("webhook_id"),
        text("uuid"),
        maybe_text("message"),
    ])
}

fn attempt() -> Shape {
    timestamped(vec![
        text("webhook_message_id"),
        Field::new("status_code", Shape::integer()).nullish(),
        maybe_text("logs"),
        maybe_text("response"),
    ])
}

fn webhook_read() -> Shape {
    read(webhook(), true)
}

/// Declares the bare status codes of the delivery control routes.
fn bare(route: Route, statuses: &[u16]) -> Route {
    statuses
        .iter()
        .fold(route, |route, status| route.respond(*status, ApiResponse::Empty))
}

pub fn list_webhook() -> Route {
    Route::new("listWebhook", RESOURCE, RestMethod::Get, "/v1/webhooks")
        .summary("List all webhooks.")
        .paged()
        .reads(array(webhook_read(), true))
        .with_errors()
}

pub fn store_webhook() -> Route {
    Route::new("storeWebhook", RESOURCE, RestMethod::Post, "/v1/webhooks")
        .summary("Store a new webhook")
        .request(ApiRequest::json(webhook_store()))
        .reads(single(webhook_read()))
        .with_validation_errors()
}

pub fn get_webhook() -> Route {
    Route::new("getWebhook", RESOURCE, RestMethod::Get, "/v1/webhooks/{id}")
        .summary("Get a single webhook.")
        .reads(single(webhook_read()))
        .with_errors()
}

pub fn update_webhook() -> Route {
    Route::new("updateWebhook", RESOURCE, RestMethod::Put, "/v1/webhooks/{id}")
        .summary("Update existing webhook.")
        .request(ApiRequest::json(webhook_update()))
        .reads(single(webhook_read()))
        .with_validation_errors()
}

pub fn delete_webhook() -> Route {
    Route::new("deleteWebhook", RESOURCE, RestMethod::Delete, "/v1/webhooks/{id}")
        .summary("Delete a webhook.")
        .no_content()
        .with_errors()
}

pub fn submit_webhook() -> Route {
    bare(
        Route::new("submitWebhook", RESOURCE, RestMethod::Post, "/v1/webhooks/{id}/submit")
            .summary("Submit messages for a webhook."),
        &[200, 204, 404, 500],
    )
}

pub fn trigger_transaction_webhook() -> Route {
    bare(
        Route::new(
            "triggerTransactionWebhook",
            RESOURCE,
            RestMethod::Post,
            "/v1/webhooks/{id}/trigger-transaction/{transactionId}",
        )
        .summary("Trigger webhook for a given transaction."),
        &[204, 404, 500],
    )
}

pub fn get_webhook_messages() -> Route {
    Route::new(
        "getWebhookMessages",
        RESOURCE,
        RestMethod::Get,
        "/v1/webhooks/{id}/messages",
    )
    .summary("Get all the messages of a single webhook.")
    .reads(array(read(message(), false), false))
    .with_errors()
}

pub fn get_single_webhook_message() -> Route {
    Route::new("getSingleWebhookMessage", RESOURCE, RestMethod::Get, MESSAGE)
        .summary("Get a single message from a webhook.")
        .reads(single(read(message(), false)))
        .with_errors()
}

pub fn delete_webhook_message() -> Route {
    Route::new("deleteWebhookMessage", RESOURCE, RestMethod::Delete, MESSAGE)
        .summary("Delete a webhook message.")
        .no_content()
        .with_errors()
}

pub fn get_webhook_message_attempts() -> Route {
    Route::new(
        "getWebhookMessageAttempts",
        RESOURCE,
        RestMethod::Get,
        "/v1/webhooks/{id}/messages/{messageId}/attempts",
    )
    .summary("Get all the failed attempts of a single webhook message.")
    .paged()
    .reads(array(read(attempt(), false), false))
    .with_errors()
}

pub fn get_single_webhook_message_attempt() -> Route {
    Route::new("getSingleWebhookMessageAttempt", RESOURCE, RestMethod::Get, ATTEMPT)
        .summary("Get a single failed attempt from a single webhook message.")
        .reads(single(read(attempt(), false)))
        .with_errors()
}

pub fn delete_webhook_message_attempt() -> Route {
    Route::new("deleteWebhookMessageAttempt", RESOURCE, RestMethod::Delete, ATTEMPT)
        .summary("Delete a webhook attempt.")
        .no_content()
        .with_errors()
}
