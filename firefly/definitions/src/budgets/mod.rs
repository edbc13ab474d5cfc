//! Budget routes.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | listBudget | GET | /v1/budgets |
//! | storeBudget | POST | /v1/budgets |
//! | getBudget | GET | /v1/budgets/{id} |
//! | updateBudget | PUT | /v1/budgets/{id} |
//! | deleteBudget | DELETE | /v1/budgets/{id} |
//! | listTransactionByBudget | GET | /v1/budgets/{id}/transactions |
//! | listAttachmentByBudget | GET | /v1/budgets/{id}/attachments |

use firefly_define::{ApiRequest, Field, QueryParam, RestMethod, Route, Shape};

use crate::attachments::attachment_array;
use crate::common::{RouteExt, array, maybe_text, read, single, text, timestamped};
use crate::transactions::transaction_array;

const RESOURCE: &str = "budgets";

/// The amount spent in one currency.
fn spent() -> Shape {
    Shape::object(vec![
        text("sum"),
        text("currency_id"),
        text("currency_code"),
        text("currency_symbol"),
        Field::new("currency_decimal_places", Shape::integer()).optional(),
    ])
}

fn auto_budget() -> Vec<Field> {
    vec![
        Field::new(
            "auto_budget_type",
            Shape::enumeration(["reset", "rollover", "none", "null"]),
        )
        .nullish(),
        maybe_text("auto_budget_currency_id"),
        maybe_text("auto_budget_currency_code"),
        maybe_text("auto_budget_amount"),
        Field::new(
            "auto_budget_period",
            Shape::enumeration([
                "daily",
                "weekly",
                "monthly",
                "quarterly",
                "half-year",
                "yearly",
                "null",
            ]),
        )
        .nullish(),
    ]
}

fn budget_fields() -> Vec<Field> {
    let mut fields = vec![
        Field::new("name", Shape::string()),
        Field::new("active", Shape::boolean()).optional(),
        Field::new("order", Shape::integer()).optional(),
        maybe_text("notes"),
    ];
    fields.extend(auto_budget());
    fields
}

/// Attributes of a budget.
pub fn budget() -> Shape {
    let mut fields = budget_fields();
    fields.push(Field::new("spent", Shape::array(spent())).optional());
    timestamped(fields)
}

fn budget_read() -> Shape {
    read(budget(), false)
}

fn window(route: Route) -> Route {
    route
        .query(QueryParam::optional("start"))
        .query(QueryParam::optional("end"))
}

pub fn list_budget() -> Route {
    window(
        Route::new("listBudget", RESOURCE, RestMethod::Get, "/v1/budgets")
            .summary("List all budgets.")
            .paged(),
    )
    .reads(array(budget_read(), false))
    .with_errors()
}

pub fn store_budget() -> Route {
    Route::new("storeBudget", RESOURCE, RestMethod::Post, "/v1/budgets")
        .summary("Store a new budget")
        .request(ApiRequest::json(Shape::object(budget_fields())))
        .reads(single(budget_read()))
        .with_validation_errors()
}

pub fn get_budget() -> Route {
    window(
        Route::new("getBudget", RESOURCE, RestMethod::Get, "/v1/budgets/{id}")
            .summary("Get a single budget."),
    )
    .reads(single(budget_read()))
    .with_errors()
}

pub fn update_budget() -> Route {
    Route::new("updateBudget", RESOURCE, RestMethod::Put, "/v1/budgets/{id}")
        .summary("Update existing budget.")
        .request(ApiRequest::json(Shape::object(budget_fields())))
        .reads(single(budget_read()))
        .with_validation_errors()
}

pub fn delete_budget() -> Route {
    Route::new("deleteBudget", RESOURCE, RestMethod::Delete, "/v1/budgets/{id}")
        .summary("Delete a budget.")
        .no_content()
        .with_errors()
}

pub fn list_transaction_by_budget() -> Route {
    window(
        Route::new(
            "listTransactionByBudget",
            RESOURCE,
            RestMethod::Get,
            "/v1/budgets/{id}/transactions",
        )
        .summary("All transactions to a budget.")
        .paged(),
    )
    .query(QueryParam::optional("type"))
    .reads(transaction_array())
    .with_errors()
}

pub fn list_attachment_by_budget() -> Route {
    Route::new(
        "listAttachmentByBudget",
        RESOURCE,
        RestMethod::Get,
        "/v1/budgets/{id}/attachments",
    )
    .summary("Lists all attachments of a budget.")
    .paged()
    .reads(attachment_array())
    .with_errors()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn auto_budget_accepts_null_and_known_periods() {
        let body = json!({
            "name": "Groceries",
            "auto_budget_type": null,
            "auto_budget_period": "monthly"
        });
        assert!(budget().validate(&body).is_ok());

        let err = budget()
            .validate(&json!({"name": "Groceries", "auto_budget_period": "fortnightly"}))
            .unwrap_err();
        assert_eq!(err.violations[0].path, "$.auto_budget_period");
    }

    #[test]
    fn list_budget_is_not_linked() {
        let route = list_budget();
        let names: Vec<_> = route.query.iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, ["limit", "page", "start", "end"]);

        let body = json!({
            "data": [{"type": "budgets", "id": "1", "attributes": {"name": "Car"}}],
            "meta": {}
        });
        let shape = route.responses.get(200).and_then(|r| r.shape()).unwrap();
        assert!(shape.validate(&body).is_ok());
    }
}
