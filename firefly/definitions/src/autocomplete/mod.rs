//! Autocomplete routes.
//!
//! Autocomplete answers are plain JSON arrays, not JSON:API envelopes.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | getAccountsAc | GET | /v1/autocomplete/accounts |
//! | getCategoriesAc | GET | /v1/autocomplete/categories |
//! | getCurrenciesAc | GET | /v1/autocomplete/currencies |
//! | getTagAc | GET | /v1/autocomplete/tags |
//! | getTransactionsAc | GET | /v1/autocomplete/transactions |
//! | getTransactionTypesAc | GET | /v1/autocomplete/transaction-types |

mod types;

pub use types::{AutocompleteAccount, AutocompleteTransaction};

use firefly_define::{ApiResponse, Field, QueryParam, RestMethod, Route, Shape};

use crate::common::{RouteExt, text};

const RESOURCE: &str = "autocomplete";

fn id_and_name(extra: Vec<Field>) -> Shape {
    let mut fields = vec![
        Field::new("id", Shape::string()),
        Field::new("name", Shape::string()),
    ];
    fields.extend(extra);
    Shape::array(Shape::object(fields))
}

fn autocomplete(id: &str, path: &str, summary: &str, items: Shape) -> Route {
    Route::new(id, RESOURCE, RestMethod::Get, path)
        .summary(summary)
        .query(QueryParam::optional("query"))
        .query(QueryParam::optional("limit"))
        .respond(200, ApiResponse::json(items))
        .with_errors()
}

pub fn get_accounts_ac() -> Route {
    autocomplete(
        "getAccountsAc",
        "/v1/autocomplete/accounts",
        "Returns all accounts of the user returned in a basic auto-complete array.",
        id_and_name(vec![
            Field::new("name_with_balance", Shape::string()),
            Field::new("type", Shape::string()),
            Field::new("currency_id", Shape::string()),
            Field::new("currency_name", Shape::string()),
            Field::new("currency_code", Shape::string()),
            Field::new("currency_symbol", Shape::string()),
            Field::new("currency_decimal_places", Shape::integer()),
        ]),
    )
    .query(QueryParam::optional("date"))
    .query(QueryParam::optional("types"))
}

pub fn get_categories_ac() -> Route {
    autocomplete(
        "getCategoriesAc",
        "/v1/autocomplete/categories",
        "Returns all categories of the user returned in a basic auto-complete array.",
        id_and_name(vec![]),
    )
}

pub fn get_currencies_ac() -> Route {
    autocomplete(
        "getCurrenciesAc",
        "/v1/autocomplete/currencies",
        "Returns all currencies of the user returned in a basic auto-complete array.",
        id_and_name(vec![
            Field::new("code", Shape::string()),
            Field::new("symbol", Shape::string()),
            Field::new("decimal_places", Shape::integer()),
        ]),
    )
}

pub fn get_tag_ac() -> Route {
    autocomplete(
        "getTagAc",
        "/v1/autocomplete/tags",
        "Returns all tags of the user returned in a basic auto-complete array.",
        id_and_name(vec![Field::new("tag", Shape::string())]),
    )
}

pub fn get_transactions_ac() -> Route {
    autocomplete(
        "getTransactionsAc",
        "/v1/autocomplete/transactions",
        "Returns all transaction descriptions of the user returned in a basic auto-complete array.",
        id_and_name(vec![
            text("transaction_group_id"),
            Field::new("description", Shape::string()),
        ]),
    )
}

pub fn get_transaction_types_ac() -> Route {
    autocomplete(
        "getTransactionTypesAc",
        "/v1/autocomplete/transaction-types",
        "Returns all transaction types returned in a basic auto-complete array.",
        id_and_name(vec![Field::new("type", Shape::string())]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn transactions_ac_is_plain_json_array() {
        let route = get_transactions_ac();
        assert_eq!(route.success_media_type(), Some("application/json"));

        let shape = route.responses.get(200).and_then(ApiResponse::shape).unwrap();
        assert!(
            shape
                .validate(&json!([{"id": "1", "name": "Groceries", "description": "Groceries"}]))
                .is_ok()
        );
        assert!(shape.validate(&json!([{"id": "1", "name": "Groceries"}])).is_err());
    }

    #[test]
    fn accounts_ac_accepts_types_filter() {
        let route = get_accounts_ac();
        let names: Vec<_> = route.query.iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, vec!["query", "limit", "date", "types"]);
    }
}
