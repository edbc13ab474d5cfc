//! Rule group routes.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | listRuleGroup | GET | /v1/rule-groups |
//! | storeRuleGroup | POST | /v1/rule-groups |
//! | getRuleGroup | GET | /v1/rule-groups/{id} |
//! | updateRuleGroup | PUT | /v1/rule-groups/{id} |
//! | deleteRuleGroup | DELETE | /v1/rule-groups/{id} |
//! | listRuleByGroup | GET | /v1/rule-groups/{id}/rules |
//! | testRuleGroup | GET | /v1/rule-groups/{id}/test |
//! | fireRuleGroup | POST | /v1/rule-groups/{id}/trigger |

use firefly_define::{ApiRequest, Field, QueryParam, RestMethod, Route, Shape};

use crate::common::{RouteExt, array, maybe_text, read, single, text, timestamped};
use crate::rules::{rule_array, run_window};
use crate::transactions::transaction_array;

const RESOURCE: &str = "rule_groups";

/// Attributes of a rule group.
pub fn rule_group() -> Shape {
    timestamped(vec![
        Field::new("title", Shape::string()),
        maybe_text("description"),
        Field::new("order", Shape::integer()).optional(),
        Field::new("active", Shape::boolean()).optional(),
    ])
}

fn rule_group_update() -> Shape {
    Shape::object(vec![
        text("title"),
        maybe_text("description"),
        Field::new("order", Shape::integer()).optional(),
        Field::new("active", Shape::boolean()).optional(),
    ])
}

fn rule_group_read() -> Shape {
    read(rule_group(), true)
}

pub fn list_rule_group() -> Route {
    Route::new("listRuleGroup", RESOURCE, RestMethod::Get, "/v1/rule-groups")
        .summary("List all rule groups.")
        .paged()
        .reads(array(rule_group_read(), true))
        .with_errors()
}

pub fn store_rule_group() -> Route {
    Route::new("storeRuleGroup", RESOURCE, RestMethod::Post, "/v1/rule-groups")
        .summary("Store a new rule group.")
        .request(ApiRequest::json(rule_group()))
        .reads(single(rule_group_read()))
        .with_validation_errors()
}

pub fn get_rule_group() -> Route {
    Route::new("getRuleGroup", RESOURCE, RestMethod::Get, "/v1/rule-groups/{id}")
        .summary("Get a single rule group.")
        .reads(single(rule_group_read()))
        .with_errors()
}

pub fn update_rule_group() -> Route {
    Route::new("updateRuleGroup", RESOURCE, RestMethod::Put, "/v1/rule-groups/{id}")
        .summary("Update existing rule group.")
        .request(ApiRequest::json(rule_group_update()))
        .reads(single(rule_group_read()))
        .with_validation_errors()
}

pub fn delete_rule_group() -> Route {
    Route::new("deleteRuleGroup", RESOURCE, RestMethod::Delete, "/v1/rule-groups/{id}")
        .summary("Delete a rule group.")
        .no_content()
        .with_errors()
}

pub fn list_rule_by_group() -> Route {
    Route::new("listRuleByGroup", RESOURCE, RestMethod::Get, "/v1/rule-groups/{id}/rules")
        .summary("List rules in this rule group.")
        .paged()
        .reads(rule_array())
        .with_errors()
}

pub fn test_rule_group() -> Route {
    run_window(
        Route::new("testRuleGroup", RESOURCE, RestMethod::Get, "/v1/rule-groups/{id}/test")
            .summary("Test which transactions would be hit by the rule group.")
            .paged(),
    )
    .query(QueryParam::optional("search_limit"))
    .query(QueryParam::optional("triggered_limit"))
    .reads(transaction_array())
    .with_errors()
}

pub fn fire_rule_group() -> Route {
    run_window(
        Route::new(
            "fireRuleGroup",
            RESOURCE,
            RestMethod::Post,
            "/v1/rule-groups/{id}/trigger",
        )
        .summary("Fire the rule group on your transactions."),
    )
    .no_content()
    .with_errors()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn store_rule_group_requires_title() {
        let Some(ApiRequest::Json(shape)) = store_rule_group().request else {
            panic!("rule group store is JSON");
        };
        assert!(shape.validate(&json!({"title": "Daily", "description": null})).is_ok());
        let err = shape.validate(&json!({"order": 1})).unwrap_err();
        assert_eq!(err.violations[0].path, "$.title");
    }

    #[test]
    fn test_rule_group_takes_limits() {
        let names: Vec<_> = test_rule_group().query.iter().map(|q| q.name.clone()).collect();
        assert!(names.iter().any(|n| n == "search_limit"));
        assert!(names.iter().any(|n| n == "accounts"));
    }
}
