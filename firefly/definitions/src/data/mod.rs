//! Bulk data routes: export, bulk update and purge.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | exportTransactions | GET | /v1/data/export/transactions |
//! | bulkUpdateTransactions | POST | /v1/data/bulk/transactions |
//! | purgeData | DELETE | /v1/data/purge |

use firefly_define::{ApiResponse, QueryParam, RestMethod, Route};

use crate::common::{RouteExt, error_body};

const RESOURCE: &str = "data";

/// Media type of exported data.
pub const CSV: &str = "text/csv";

pub fn export_transactions() -> Route {
    Route::new(
        "exportTransactions",
        RESOURCE,
        RestMethod::Get,
        "/v1/data/export/transactions",
    )
    .summary("Export transaction data from Firefly III")
    .query(QueryParam::required("start"))
    .query(QueryParam::required("end"))
    .query(QueryParam::optional("accounts"))
    .query(QueryParam::optional("type"))
    .respond(200, ApiResponse::text(CSV))
    .with_errors()
}

pub fn bulk_update_transactions() -> Route {
    Route::new(
        "bulkUpdateTransactions",
        RESOURCE,
        RestMethod::Post,
        "/v1/data/bulk/transactions",
    )
    .summary("Bulk update transaction properties.")
    .query(QueryParam::required("query"))
    .without_trace_header()
    .no_content()
    .with_errors()
}

pub fn purge_data() -> Route {
    Route::new("purgeData", RESOURCE, RestMethod::Delete, "/v1/data/purge")
        .summary("Endpoint to purge user data")
        .no_content()
        .respond(400, ApiResponse::json(error_body()))
        .respond(401, ApiResponse::json(error_body()))
        .respond(500, ApiResponse::json(error_body()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_is_csv_text() {
        let route = export_transactions();
        assert!(route.responses.get(200).is_some_and(ApiResponse::is_text));
        assert_eq!(route.success_media_type(), Some(CSV));
        assert_eq!(route.required_query().collect::<Vec<_>>(), vec!["start", "end"]);
    }

    #[test]
    fn bulk_update_has_no_trace_header() {
        assert!(!bulk_update_transactions().trace_header);
        assert!(purge_data().trace_header);
    }

    #[test]
    fn purge_declares_no_404() {
        assert!(purge_data().responses.get(404).is_none());
    }
}
