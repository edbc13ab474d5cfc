//! Currency routes.
//!
//! Currencies are addressed by their ISO code, not by id.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | listCurrency | GET | /v1/currencies |
//! | storeCurrency | POST | /v1/currencies |
//! | getDefaultCurrency | GET | /v1/currencies/default |
//! | getCurrency | GET | /v1/currencies/{code} |
//! | updateCurrency | PUT | /v1/currencies/{code} |
//! | deleteCurrency | DELETE | /v1/currencies/{code} |
//! | enableCurrency | POST | /v1/currencies/{code}/enable |
//! | disableCurrency | POST | /v1/currencies/{code}/disable |
//! | defaultCurrency | POST | /v1/currencies/{code}/default |
//! | listAccountByCurrency | GET | /v1/currencies/{code}/accounts |

use firefly_define::{ApiRequest, Field, QueryParam, RestMethod, Route, Shape};

use crate::accounts::account_array;
use crate::common::{RouteExt, array, enabled_by_default, read, single, text, timestamped};

const RESOURCE: &str = "currencies";

/// Attributes of a currency.
pub fn currency() -> Shape {
    timestamped(vec![
        enabled_by_default("enabled"),
        Field::new("default", Shape::boolean()).optional(),
        Field::new("code", Shape::string()),
        Field::new("name", Shape::string()),
        Field::new("symbol", Shape::string()),
        Field::new("decimal_places", Shape::integer()).optional(),
    ])
}

fn currency_update() -> Shape {
    Shape::object(vec![
        Field::new("enabled", Shape::boolean()).optional(),
        Field::new("default", Shape::boolean()).optional(),
        text("code"),
        text("name"),
        text("symbol"),
        Field::new("decimal_places", Shape::integer()).optional(),
    ])
}

fn currency_single() -> Shape {
    single(read(currency(), false))
}

fn by_code(id: &str, method: RestMethod, path: &str, summary: &str) -> Route {
    Route::new(id, RESOURCE, method, path).summary(summary)
}

pub fn list_currency() -> Route {
    Route::new("listCurrency", RESOURCE, RestMethod::Get, "/v1/currencies")
        .summary("List all currencies.")
        .paged()
        .reads(array(read(currency(), false), true))
        .with_errors()
}

pub fn store_currency() -> Route {
    Route::new("storeCurrency", RESOURCE, RestMethod::Post, "/v1/currencies")
        .summary("Store a new currency")
        .request(ApiRequest::json(currency()))
        .reads(currency_single())
        .with_validation_errors()
}

pub fn get_default_currency() -> Route {
    Route::new(
        "getDefaultCurrency",
        RESOURCE,
        RestMethod::Get,
        "/v1/currencies/default",
    )
    .summary("Get the user's default currency.")
    .reads(currency_single())
    .with_errors()
}

pub fn get_currency() -> Route {
    by_code("getCurrency", RestMethod::Get, "/v1/currencies/{code}", "Get a single currency.")
        .reads(currency_single())
        .with_errors()
}

pub fn update_currency() -> Route {
    by_code(
        "updateCurrency",
        RestMethod::Put,
        "/v1/currencies/{code}",
        "Update existing currency.",
    )
    .request(ApiRequest::json(currency_update()))
    .reads(currency_single())
    .with_validation_errors()
}

pub fn delete_currency() -> Route {
    by_code(
        "deleteCurrency",
        RestMethod::Delete,
        "/v1/currencies/{code}",
        "Delete a currency.",
    )
    .no_content()
    .with_errors()
}

pub fn enable_currency() -> Route {
    by_code(
        "enableCurrency",
        RestMethod::Post,
        "/v1/currencies/{code}/enable",
        "Enable a single currency.",
    )
    .reads(currency_single())
    .with_errors()
}

pub fn disable_currency() -> Route {
    by_code(
        "disableCurrency",
        RestMethod::Post,
        "/v1/currencies/{code}/disable",
        "Disable a currency.",
    )
    .reads(currency_single())
    .with_validation_errors()
}

pub fn default_currency() -> Route {
    by_code(
        "defaultCurrency",
        RestMethod::Post,
        "/v1/currencies/{code}/default",
        "Make currency default currency.",
    )
    .reads(currency_single())
    .with_errors()
}

pub fn list_account_by_currency() -> Route {
    by_code(
        "listAccountByCurrency",
        RestMethod::Get,
        "/v1/currencies/{code}/accounts",
        "List all accounts with this currency.",
    )
    .paged()
    .query(QueryParam::optional("date"))
    .query(QueryParam::optional("type"))
    .reads(account_array())
    .with_errors()
}

#[cfg(test)]
mod tests {
    use super::*;
    use firefly_define::ApiResponse;
    use serde_json::json;

    #[test]
    fn currency_enabled_defaults_to_true() {
        let coerced = currency()
            .validate(&json!({"code": "EUR", "name": "Euro", "symbol": "€"}))
            .unwrap();
        assert_eq!(coerced["enabled"], json!(true));
    }

    #[test]
    fn currency_routes_use_code_placeholder() {
        for route in [get_currency(), enable_currency(), list_account_by_currency()] {
            assert_eq!(route.path_params(), vec!["code"]);
        }
        assert!(get_default_currency().path_params().is_empty());
    }

    #[test]
    fn enable_returns_currency() {
        assert!(
            enable_currency()
                .responses
                .get(200)
                .is_some_and(ApiResponse::is_json)
        );
    }
}
