//! Attachment routes.
//!
//! Attachments are the only resource with binary bodies: the upload route
//! takes raw bytes and the download route returns them unmodified.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | listAttachment | GET | /v1/attachments |
//! | storeAttachment | POST | /v1/attachments |
//! | getAttachment | GET | /v1/attachments/{id} |
//! | updateAttachment | PUT | /v1/attachments/{id} |
//! | deleteAttachment | DELETE | /v1/attachments/{id} |
//! | downloadAttachment | GET | /v1/attachments/{id}/download |
//! | uploadAttachment | POST | /v1/attachments/{id}/upload |

use firefly_define::{ApiRequest, ApiResponse, Field, RestMethod, Route, Shape};

use crate::common::{RouteExt, array, maybe_text, read, single, text, timestamped};

const RESOURCE: &str = "attachments";

/// Media type of raw attachment content.
pub const OCTET_STREAM: &str = "application/octet-stream";

fn attachable_type() -> Shape {
    Shape::enumeration(["Account", "Budget", "Bill", "TransactionJournal", "PiggyBank", "Tag"])
}

/// Attributes of an attachment.
pub fn attachment() -> Shape {
    timestamped(vec![
        Field::new("attachable_type", attachable_type()),
        Field::new("attachable_id", Shape::string()),
        text("md5"),
        Field::new("filename", Shape::string()),
        text("download_url"),
        text("upload_url"),
        maybe_text("title"),
        maybe_text("notes"),
        text("mime"),
        Field::new("size", Shape::integer()).optional(),
    ])
}

fn attachment_store() -> Shape {
    Shape::object(vec![
        Field::new("filename", Shape::string()),
        Field::new("attachable_type", attachable_type()),
        Field::new("attachable_id", Shape::string()),
        text("title"),
        text("notes"),
    ])
}

fn attachment_update() -> Shape {
    Shape::object(vec![text("filename"), text("title"), text("notes")])
}

fn attachment_read() -> Shape {
    read(attachment(), true)
}

/// `{data: [attachment], meta}`.
pub fn attachment_array() -> Shape {
    array(attachment_read(), false)
}

pub fn list_attachment() -> Route {
    Route::new("listAttachment", RESOURCE, RestMethod::Get, "/v1/attachments")
        .summary("List all attachments.")
        .paged()
        .reads(attachment_array())
        .with_errors()
}

pub fn store_attachment() -> Route {
    Route::new("storeAttachment", RESOURCE, RestMethod::Post, "/v1/attachments")
        .summary("Store a new attachment.")
        .request(ApiRequest::json(attachment_store()))
        .reads(single(attachment_read()))
        .with_validation_errors()
}

pub fn get_attachment() -> Route {
    Route::new("getAttachment", RESOURCE, RestMethod::Get, "/v1/attachments/{id}")
        .summary("Get a single attachment.")
        .reads(single(attachment_read()))
        .with_errors()
}

pub fn update_attachment() -> Route {
    Route::new("updateAttachment", RESOURCE, RestMethod::Put, "/v1/attachments/{id}")
        .summary("Update existing attachment.")
        .request(ApiRequest::json(attachment_update()))
        .reads(single(attachment_read()))
        .with_validation_errors()
}

pub fn delete_attachment() -> Route {
    Route::new("deleteAttachment", RESOURCE, RestMethod::Delete, "/v1/attachments/{id}")
        .summary("Delete an attachment.")
        .no_content()
        .with_errors()
}

pub fn download_attachment() -> Route {
    Route::new(
        "downloadAttachment",
        RESOURCE,
        RestMethod::Get,
        "/v1/attachments/{id}/download",
    )
    .summary("Download a single attachment.")
    .respond(200, ApiResponse::binary(OCTET_STREAM))
    .with_errors()
}

pub fn upload_attachment() -> Route {
    Route::new(
        "uploadAttachment",
        RESOURCE,
        RestMethod::Post,
        "/v1/attachments/{id}/upload",
    )
    .summary("Upload an attachment.")
    .request(ApiRequest::binary(OCTET_STREAM))
    .no_content()
    .with_errors()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn download_is_binary() {
        let route = download_attachment();
        assert!(route.responses.get(200).is_some_and(ApiResponse::is_binary));
        assert_eq!(route.success_media_type(), Some(OCTET_STREAM));
    }

    #[test]
    fn upload_takes_raw_bytes() {
        let route = upload_attachment();
        assert_eq!(
            route.request.as_ref().map(ApiRequest::content_type),
            Some(OCTET_STREAM)
        );
        assert!(route.responses.get(204).is_some_and(ApiResponse::is_empty));
    }

    #[test]
    fn attachable_type_is_enforced() {
        let body = json!({"attachable_type": "Invoice", "attachable_id": "1", "filename": "a.pdf"});
        let err = attachment().validate(&body).unwrap_err();
        assert_eq!(err.violations[0].path, "$.attachable_type");
    }
}
