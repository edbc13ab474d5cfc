//! Rule routes.
//!
//! A rule pairs a list of triggers with a list of actions and belongs to a
//! rule group (see [`crate::rule_groups`]).
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | listRule | GET | /v1/rules |
//! | storeRule | POST | /v1/rules |
//! | getRule | GET | /v1/rules/{id} |
//! | updateRule | PUT | /v1/rules/{id} |
//! | deleteRule | DELETE | /v1/rules/{id} |
//! | testRule | GET | /v1/rules/{id}/test |
//! | fireRule | POST | /v1/rules/{id}/trigger |

use firefly_define::{ApiRequest, Field, QueryParam, RestMethod, Route, Shape};
use serde_json::json;

use crate::common::{RouteExt, array, enabled_by_default, read, single, text, timestamped};
use crate::transactions::transaction_array;

const RESOURCE: &str = "rules";

const TRIGGER_KEYWORDS: [&str; 36] = [
    "from_account_starts",
    "from_account_ends",
    "from_account_is",
    "from_account_contains",
    "to_account_starts",
    "to_account_ends",
    "to_account_is",
    "to_account_contains",
    "amount_less",
    "amount_exactly",
    "amount_more",
    "description_starts",
    "description_ends",
    "description_contains",
    "description_is",
    "transaction_type",
    "category_is",
    "budget_is",
    "tag_is",
    "currency_is",
    "has_attachments",
    "has_no_category",
    "has_any_category",
    "has_no_budget",
    "has_any_budget",
    "has_no_tag",
    "has_any_tag",
    "notes_contains",
    "notes_start",
    "notes_end",
    "notes_are",
    "no_notes",
    "any_notes",
    "source_account_is",
    "destination_account_is",
    "source_account_starts",
];

const ACTION_KEYWORDS: [&str; 22] = [
    "user_action",
    "set_category",
    "clear_category",
    "set_budget",
    "clear_budget",
    "add_tag",
    "remove_tag",
    "remove_all_tags",
    "set_description",
    "append_description",
    "prepend_description",
    "set_source_account",
    "set_destination_account",
    "set_notes",
    "append_notes",
    "prepend_notes",
    "clear_notes",
    "link_to_bill",
    "convert_withdrawal",
    "convert_deposit",
    "convert_transfer",
    "delete_transaction",
];

fn stops_by_default() -> Field {
    Field::new("stop_processing", Shape::boolean()).with_default(json!(false))
}

fn order() -> Field {
    Field::new("order", Shape::integer()).optional()
}

fn trigger_kind() -> Shape {
    Shape::enumeration(["store-journal", "update-journal"])
}

fn rule_trigger() -> Shape {
    timestamped(vec![
        text("id"),
        Field::new("type", Shape::enumeration(TRIGGER_KEYWORDS)),
        Field::new("value", Shape::string()),
        Field::new("prohibited", Shape::boolean()).with_default(json!(false)),
        order(),
        enabled_by_default("active"),
        stops_by_default(),
    ])
}

fn rule_action() -> Shape {
    timestamped(vec![
        text("id"),
        Field::new("type", Shape::enumeration(ACTION_KEYWORDS)),
        Field::new("value", Shape::string()).nullable(),
        order(),
        enabled_by_default("active"),
        stops_by_default(),
    ])
}

/// Attributes of a rule.
pub fn rule() -> Shape {
    timestamped(vec![
        Field::new("title", Shape::string()),
        text("description"),
        Field::new("rule_group_id", Shape::string()),
        text("rule_group_title"),
        order(),
        Field::new("trigger", trigger_kind()),
        enabled_by_default("active"),
        Field::new("strict", Shape::boolean()).optional(),
        stops_by_default(),
        Field::new("triggers", Shape::array(rule_trigger())),
        Field::new("actions", Shape::array(rule_action())),
    ])
}

fn rule_store() -> Shape {
    Shape::object(vec![
        Field::new("title", Shape::string()),
        text("description"),
        Field::new("rule_group_id", Shape::string()),
        text("rule_group_title"),
        order(),
        Field::new("trigger", trigger_kind()),
        enabled_by_default("active"),
        enabled_by_default("strict"),
        Field::new("stop_processing", Shape::boolean()).optional(),
        Field::new(
            "triggers",
            Shape::array(Shape::object(vec![
                Field::new("type", Shape::enumeration(TRIGGER_KEYWORDS)),
                Field::new("value", Shape::string()),
                order(),
                enabled_by_default("active"),
                Field::new("prohibited", Shape::boolean()).with_default(json!(false)),
                stops_by_default(),
            ])),
        ),
        Field::new(
            "actions",
            Shape::array(Shape::object(vec![
                Field::new("type", Shape::enumeration(ACTION_KEYWORDS)),
                Field::new("value", Shape::string()).nullable(),
                order(),
                enabled_by_default("active"),
                stops_by_default(),
            ])),
        ),
    ])
}

fn rule_update() -> Shape {
    let step = |keywords: &[&str]| {
        Shape::object(vec![
            Field::new("type", Shape::enumeration(keywords.iter().copied())).optional(),
            Field::new("value", Shape::string()).nullish(),
            order(),
            Field::new("active", Shape::boolean()).optional(),
            Field::new("stop_processing", Shape::boolean()).optional(),
        ])
    };
    Shape::object(vec![
        text("title"),
        text("description"),
        text("rule_group_id"),
        order(),
        Field::new("trigger", trigger_kind()).optional(),
        enabled_by_default("active"),
        Field::new("strict", Shape::boolean()).optional(),
        stops_by_default(),
        Field::new("triggers", Shape::array(step(&TRIGGER_KEYWORDS))).optional(),
        Field::new("actions", Shape::array(step(&ACTION_KEYWORDS))).optional(),
    ])
}

fn rule_read() -> Shape {
    read(rule(), true)
}

/// Paged `{data, meta, links}` list of rules.
pub fn rule_array() -> Shape {
    array(rule_read(), true)
}

/// `start`, `end` and `accounts`, shared by the test and trigger routes.
pub(crate) fn run_window(route: Route) -> Route {
    route
        .query(QueryParam::optional("start"))
        .query(QueryParam::optional("end"))
        .query(QueryParam::optional("accounts"))
}

pub fn list_rule() -> Route {
    Route::new("listRule", RESOURCE, RestMethod::Get, "/v1/rules")
        .summary("List all rules.")
        .paged()
        .reads(rule_array())
        .with_errors()
}

pub fn store_rule() -> Route {
    Route::new("storeRule", RESOURCE, RestMethod::Post, "/v1/rules")
        .summary("Store a new rule")
        .request(ApiRequest::json(rule_store()))
        .reads(single(rule_read()))
        .with_validation_errors()
}

pub fn get_rule() -> Route {
    Route::new("getRule", RESOURCE, RestMethod::Get, "/v1/rules/{id}")
        .summary("Get a single rule.")
        .reads(single(rule_read()))
        .with_errors()
}

pub fn update_rule() -> Route {
    Route::new("updateRule", RESOURCE, RestMethod::Put, "/v1/rules/{id}")
        .summary("Update existing rule.")
        .request(ApiRequest::json(rule_update()))
        .reads(single(rule_read()))
        .with_validation_errors()
}

pub fn delete_rule() -> Route {
    Route::new("deleteRule", RESOURCE, RestMethod::Delete, "/v1/rules/{id}")
        .summary("Delete an rule.")
        .no_content()
        .with_errors()
}

pub fn test_rule() -> Route {
    run_window(
        Route::new("testRule", RESOURCE, RestMethod::Get, "/v1/rules/{id}/test")
            .summary("Test which transactions would be hit by the rule. No changes will be made."),
    )
    .reads(transaction_array())
    .with_errors()
}

pub fn fire_rule() -> Route {
    run_window(
        Route::new("fireRule", RESOURCE, RestMethod::Post, "/v1/rules/{id}/trigger")
            .summary("Fire the rule on your transactions."),
    )
    .no_content()
    .with_errors()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> serde_json::Value {
        json!({
            "title": "Groceries",
            "rule_group_id": "1",
            "trigger": "store-journal",
            "triggers": [{"type": "description_contains", "value": "market"}],
            "actions": [{"type": "set_category", "value": "Food"}]
        })
    }

    #[test]
    fn rule_fills_step_defaults() {
        let coerced = rule().validate(&minimal()).unwrap();
        assert_eq!(coerced["active"], json!(true));
        assert_eq!(coerced["triggers"][0]["prohibited"], json!(false));
        assert_eq!(coerced["actions"][0]["stop_processing"], json!(false));
    }

    #[test]
    fn unknown_trigger_keyword_is_rejected() {
        let mut body = minimal();
        body["triggers"][0]["type"] = json!("moon_phase");
        let err = rule().validate(&body).unwrap_err();
        assert_eq!(err.violations[0].path, "$.triggers[0].type");
    }

    #[test]
    fn store_rule_defaults_to_strict() {
        let Some(ApiRequest::Json(shape)) = store_rule().request else {
            panic!("rule store is JSON");
        };
        assert_eq!(shape.validate(&minimal()).unwrap()["strict"], json!(true));
    }

    #[test]
    fn fire_rule_has_no_body_and_no_content() {
        let route = fire_rule();
        assert!(route.request.is_none());
        assert!(route.responses.get(204).is_some());
        assert_eq!(route.required_query().count(), 0);
    }
}
