//! Search routes.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | searchAccounts | GET | /v1/search/accounts |
//! | searchTransactions | GET | /v1/search/transactions |

use firefly_define::{QueryParam, RestMethod, Route};

use crate::accounts::account_array;
use crate::common::RouteExt;
use crate::transactions::transaction_array;

const RESOURCE: &str = "search";

/// Fields `searchAccounts` can match on.
pub const ACCOUNT_FIELDS: [&str; 5] = ["all", "iban", "name", "number", "id"];

pub fn search_accounts() -> Route {
    Route::new("searchAccounts", RESOURCE, RestMethod::Get, "/v1/search/accounts")
        .summary("Search for accounts")
        .paged()
        .query(QueryParam::required("query"))
        .query(QueryParam::optional("type"))
        .query(QueryParam::required("field"))
        .reads(account_array())
        .with_errors()
}

pub fn search_transactions() -> Route {
    Route::new(
        "searchTransactions",
        RESOURCE,
        RestMethod::Get,
        "/v1/search/transactions",
    )
    .summary("Search for transactions")
    .paged()
    .query(QueryParam::required("query"))
    .reads(transaction_array())
    .with_errors()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_search_requires_query_and_field() {
        let route = search_accounts();
        assert_eq!(
            route.required_query().collect::<Vec<_>>(),
            vec!["query", "field"]
        );
    }

    #[test]
    fn transaction_search_requires_query() {
        assert_eq!(
            search_transactions().required_query().collect::<Vec<_>>(),
            vec!["query"]
        );
    }
}
