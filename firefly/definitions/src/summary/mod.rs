//! Summary and chart routes.
//!
//! Both routes need a `start` and `end` date. The basic summary answers a
//! record keyed by entry name (`balance-in-EUR`, `spent-in-EUR`, ...); the
//! account chart answers a bare JSON array of data sets.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | getBasicSummary | GET | /v1/summary/basic |
//! | getChartAccountOverview | GET | /v1/chart/account/overview |

use firefly_define::{ApiResponse, Field, QueryParam, RestMethod, Route, Shape};

use crate::common::{RouteExt, text};

const RESOURCE: &str = "summary";

fn currency() -> Vec<Field> {
    vec![
        text("currency_id"),
        text("currency_code"),
        text("currency_symbol"),
        Field::new("currency_decimal_places", Shape::integer()).optional(),
    ]
}

/// One entry of the basic summary.
pub fn summary_entry() -> Shape {
    let mut fields = vec![
        text("key"),
        text("title"),
        Field::new("monetary_value", Shape::number()).optional(),
    ];
    fields.extend(currency());
    fields.extend([text("value_parsed"), text("local_icon"), text("sub_title")]);
    Shape::object(fields)
}

/// One line of a chart.
pub fn chart_data_set() -> Shape {
    let mut fields = vec![text("label")];
    fields.extend(currency());
    fields.extend([
        Field::new("start_date", Shape::date_time()).optional(),
        Field::new("end_date", Shape::date_time()).optional(),
        text("type"),
        Field::new("yAxisID", Shape::integer()).optional(),
        Field::new("entries", Shape::array(Shape::object(vec![text("key")]))).optional(),
    ]);
    Shape::object(fields)
}

fn period(route: Route) -> Route {
    route
        .query(QueryParam::required("start"))
        .query(QueryParam::required("end"))
}

pub fn get_basic_summary() -> Route {
    period(
        Route::new("getBasicSummary", RESOURCE, RestMethod::Get, "/v1/summary/basic")
            .summary("Returns basic sums of the users data."),
    )
    .query(QueryParam::optional("currency_code"))
    .reads(Shape::record(summary_entry()))
    .with_errors()
}

pub fn get_chart_account_overview() -> Route {
    period(
        Route::new(
            "getChartAccountOverview",
            RESOURCE,
            RestMethod::Get,
            "/v1/chart/account/overview",
        )
        .summary("Dashboard chart with asset account balance information."),
    )
    .respond(200, ApiResponse::json(Shape::array(chart_data_set())))
    .with_errors()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_requires_a_period() {
        let route = get_basic_summary();
        let required: Vec<_> = route.required_query().collect();
        assert_eq!(required, ["start", "end"]);
    }

    #[test]
    fn summary_entries_are_keyed_by_name() {
        let route = get_basic_summary();
        let shape = route.responses.get(200).and_then(|r| r.shape()).unwrap();
        let body = json!({
            "balance-in-EUR": {
                "key": "balance-in-EUR",
                "monetary_value": 1520.5,
                "currency_code": "EUR",
                "value_parsed": "€1,520.50"
            }
        });
        assert!(shape.validate(&body).is_ok());

        let bad = json!({"balance-in-EUR": {"monetary_value": "1520.50"}});
        let err = shape.validate(&bad).unwrap_err();
        assert_eq!(err.violations[0].path, "$.balance-in-EUR.monetary_value");
    }

    #[test]
    fn chart_is_plain_json() {
        let route = get_chart_account_overview();
        assert_eq!(route.success_media_type(), Some("application/json"));
        let shape = route.responses.get(200).and_then(|r| r.shape()).unwrap();
        let body = json!([{"label": "Checking", "entries": [{"key": "2024-01-01"}]}]);
        assert!(shape.validate(&body).is_ok());
    }
}
