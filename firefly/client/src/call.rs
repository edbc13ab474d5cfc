//! Per-call inputs.
//!
//! [`CallParams`] carries everything a route call varies on: path values,
//! query values, extra headers, the body and a validation override.
//!
//! ## Examples
//!
//! ```
//! use firefly_client::{CallParams, RequestBody};
//! use serde_json::json;
//!
//! let params = CallParams::new()
//!     .path("id", "42")
//!     .query("type", vec!["asset", "expense"])
//!     .header("X-Request-Source", "cli")
//!     .body(RequestBody::Json(json!({"name": "Checking"})))
//!     .validate(false);
//!
//! assert_eq!(params.path.get("id").map(String::as_str), Some("42"));
//! assert_eq!(params.validate, Some(false));
//! ```

use std::collections::BTreeMap;

use bytes::Bytes;
use serde::Serialize;

use crate::error::UsageError;

/// A query value: one scalar, or a list encoded per the client's
/// [`ArrayEncoding`](crate::ArrayEncoding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    One(String),
    Many(Vec<String>),
}

impl QueryValue {
    /// Returns `true` for an empty list.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Many(values) if values.is_empty())
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::One(value.clone())
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::One(value.to_string())
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        Self::One(value.to_string())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::One(value.to_string())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for QueryValue {
    fn from(values: &[&str]) -> Self {
        Self::Many(values.iter().map(|value| value.to_string()).collect())
    }
}

/// A request body, attached as given.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized as `application/json`.
    Json(serde_json::Value),
    /// Serialized as `application/x-www-form-urlencoded`, in order.
    Form(Vec<(String, String)>),
    /// Sent verbatim with the route's declared text media type.
    Text(String),
    /// Sent verbatim with the route's declared binary media type.
    Bytes(Bytes),
}

impl RequestBody {
    /// Serializes `value` into a JSON body.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, UsageError> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Builds a form body from name/value pairs.
    pub fn form<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Form(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Short name of the body kind, used in usage errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Form(_) => "form",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
        }
    }
}

/// Inputs of a single route call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallParams {
    /// Values for the `{name}` placeholders of the path template.
    pub path: BTreeMap<String, String>,
    /// Query parameters in the order they were added.
    pub query: Vec<(String, QueryValue)>,
    /// Extra headers; these win over the client's default headers.
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
    /// Overrides the route's own validation flag when set.
    pub validate: Option<bool>,
}

impl CallParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a path placeholder value.
    pub fn path(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.path.insert(name.into(), value.to_string());
        self
    }

    /// Sets a query parameter, replacing an earlier value of the same name.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.query.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.query.push((name, value)),
        }
        self
    }

    /// Sets the query parameter only when `value` is present.
    pub fn query_opt<V: Into<QueryValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Adds a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Shorthand for a JSON body.
    pub fn json(self, value: serde_json::Value) -> Self {
        self.body(RequestBody::Json(value))
    }

    /// Forces response validation on or off for this call.
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = Some(validate);
        self
    }

    /// Returns the value of a query parameter.
    pub fn query_value(&self, name: &str) -> Option<&QueryValue> {
        self.query
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_replaces_same_name() {
        let params = CallParams::new()
            .query("page", 1u32)
            .query("limit", 50u32)
            .query("page", 2u32);

        assert_eq!(params.query.len(), 2);
        assert_eq!(params.query_value("page"), Some(&QueryValue::One("2".into())));
        assert_eq!(params.query[0].0, "page");
    }

    #[test]
    fn query_opt_skips_none() {
        let params = CallParams::new()
            .query_opt("type", None::<&str>)
            .query_opt("date", Some("2024-01-01"));
        assert_eq!(params.query.len(), 1);
        assert_eq!(params.query[0].0, "date");
    }

    #[test]
    fn list_values_convert_to_many() {
        let value: QueryValue = vec!["asset", "expense"].into();
        assert_eq!(
            value,
            QueryValue::Many(vec!["asset".to_string(), "expense".to_string()])
        );
        assert!(QueryValue::Many(vec![]).is_empty());
        assert!(!QueryValue::from("").is_empty());
    }

    #[test]
    fn json_body_from_serializable() {
        #[derive(Serialize)]
        struct Store {
            name: &'static str,
        }

        let body = RequestBody::json(&Store { name: "Checking" }).unwrap();
        assert_eq!(body, RequestBody::Json(json!({"name": "Checking"})));
        assert_eq!(body.kind(), "json");
    }

    #[test]
    fn form_body_keeps_order() {
        let body = RequestBody::form([("value", "true"), ("extra", "1")]);
        assert_eq!(
            body,
            RequestBody::Form(vec![
                ("value".to_string(), "true".to_string()),
                ("extra".to_string(), "1".to_string()),
            ])
        );
    }
}
