//! Shape definitions for request/response bodies.
//!
//! A [`Shape`] describes the structure a JSON body is expected to have and
//! can check a decoded value against it. Objects are passthrough: keys the
//! shape does not mention are kept untouched, never rejected.
//!
//! Validation returns the coerced value (declared defaults filled in for
//! absent fields) or a [`ShapeError`] listing every [`Violation`] found.

use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Value};
use strum::Display;
use thiserror::Error;

/// Format constraint for string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum StringFormat {
    /// RFC 3339 date-time with offset (`2024-01-31T10:00:00+01:00`).
    DateTime,
    /// Calendar date (`2024-01-31`).
    Date,
    /// Hyphenated UUID.
    Uuid,
    /// Absolute URL.
    Url,
    /// E-mail address.
    Email,
}

impl StringFormat {
    /// Returns true when `value` satisfies the format.
    pub fn matches(self, value: &str) -> bool {
        match self {
            Self::DateTime => DateTime::parse_from_rfc3339(value).is_ok(),
            Self::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
            Self::Uuid => uuid::Uuid::parse_str(value).is_ok(),
            Self::Url => url::Url::parse(value).is_ok(),
            Self::Email => is_email(value),
        }
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// How a field may appear inside an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    /// Must be present and non-null.
    #[default]
    Required,
    /// May be absent; `null` is rejected.
    Optional,
    /// Must be present; `null` is accepted.
    Nullable,
    /// May be absent or `null`.
    Nullish,
}

impl Presence {
    /// Returns true when the field must be present.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Required | Self::Nullable)
    }

    /// Returns true when `null` is an acceptable value.
    pub fn allows_null(self) -> bool {
        matches!(self, Self::Nullable | Self::Nullish)
    }
}

/// A named member of an object shape.
///
/// ## Examples
///
/// ```
/// use firefly_define::{Field, Presence, Shape};
/// use serde_json::json;
///
/// let active = Field::new("active", Shape::boolean()).with_default(json!(true));
/// assert_eq!(active.presence, Presence::Optional);
///
/// let notes = Field::new("notes", Shape::string()).nullish();
/// assert!(notes.presence.allows_null());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Key in the JSON object.
    pub name: String,
    /// Shape the value must have.
    pub shape: Shape,
    /// Whether the key may be absent or null.
    pub presence: Presence,
    /// Value filled in when the key is absent.
    pub default: Option<Value>,
}

impl Field {
    /// Creates a required field.
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
            presence: Presence::Required,
            default: None,
        }
    }

    /// The field may be absent.
    pub fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    /// The field must be present but may be `null`.
    pub fn nullable(mut self) -> Self {
        self.presence = Presence::Nullable;
        self
    }

    /// The field may be absent or `null`.
    pub fn nullish(mut self) -> Self {
        self.presence = Presence::Nullish;
        self
    }

    /// Fills in `value` when the field is absent. Implies optional.
    pub fn with_default(mut self, value: Value) -> Self {
        if self.presence == Presence::Required {
            self.presence = Presence::Optional;
        }
        self.default = Some(value);
        self
    }
}

/// Structural description of a JSON value.
///
/// ## Examples
///
/// ```
/// use firefly_define::{Field, Shape};
/// use serde_json::json;
///
/// let account = Shape::object(vec![
///     Field::new("name", Shape::string()),
///     Field::new("type", Shape::enumeration(["asset", "expense", "revenue"])),
///     Field::new("active", Shape::boolean()).with_default(json!(true)),
/// ]);
///
/// let coerced = account.validate(&json!({"name": "Checking", "type": "asset"})).unwrap();
/// assert_eq!(coerced["active"], json!(true));
///
/// let err = account.validate(&json!({"name": 7, "type": "loan"})).unwrap_err();
/// assert_eq!(err.violations.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Any value, including `null`.
    Any,
    /// No content: only `null` is accepted.
    Void,
    /// A string, optionally constrained by a format.
    String(Option<StringFormat>),
    /// A number without fractional part.
    Integer,
    /// Any number.
    Number,
    /// `true` or `false`.
    Boolean,
    /// One of a fixed set of strings.
    Enum(Vec<String>),
    /// A list whose items all have the inner shape.
    Array(Box<Shape>),
    /// An object with declared fields; other keys pass through.
    Object(Vec<Field>),
    /// An object whose values all have the inner shape.
    Record(Box<Shape>),
    /// A value matching at least one of the shapes, tried in order.
    OneOf(Vec<Shape>),
}

impl Shape {
    /// Plain string.
    pub fn string() -> Self {
        Self::String(None)
    }

    /// RFC 3339 date-time string.
    pub fn date_time() -> Self {
        Self::String(Some(StringFormat::DateTime))
    }

    /// Calendar date string.
    pub fn date() -> Self {
        Self::String(Some(StringFormat::Date))
    }

    /// UUID string.
    pub fn uuid() -> Self {
        Self::String(Some(StringFormat::Uuid))
    }

    /// URL string.
    pub fn url() -> Self {
        Self::String(Some(StringFormat::Url))
    }

    /// E-mail string.
    pub fn email() -> Self {
        Self::String(Some(StringFormat::Email))
    }

    pub fn integer() -> Self {
        Self::Integer
    }

    pub fn number() -> Self {
        Self::Number
    }

    pub fn boolean() -> Self {
        Self::Boolean
    }

    /// Enumerated strings.
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum(values.into_iter().map(Into::into).collect())
    }

    pub fn array(item: Shape) -> Self {
        Self::Array(Box::new(item))
    }

    pub fn object(fields: Vec<Field>) -> Self {
        Self::Object(fields)
    }

    pub fn record(value: Shape) -> Self {
        Self::Record(Box::new(value))
    }

    pub fn one_of(variants: Vec<Shape>) -> Self {
        Self::OneOf(variants)
    }

    /// Short description used as the "expected" side of a violation.
    pub fn describe(&self) -> String {
        match self {
            Self::Any => "any value".to_string(),
            Self::Void => "no content".to_string(),
            Self::String(None) => "string".to_string(),
            Self::String(Some(format)) => format!("string ({format})"),
            Self::Integer => "integer".to_string(),
            Self::Number => "number".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::Enum(values) => format!("one of [{}]", values.join(", ")),
            Self::Array(item) => format!("array of {}", item.describe()),
            Self::Object(_) => "object".to_string(),
            Self::Record(value) => format!("record of {}", value.describe()),
            Self::OneOf(variants) => variants
                .iter()
                .map(Shape::describe)
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }

    /// Checks `value` against this shape.
    ///
    /// Returns the coerced value on success: declared defaults are filled in
    /// and unknown object keys are kept. On failure every violation is
    /// reported, not just the first.
    pub fn validate(&self, value: &Value) -> Result<Value, ShapeError> {
        let mut violations = Vec::new();
        let coerced = self.check(value, "$", &mut violations);

        if violations.is_empty() {
            Ok(coerced)
        } else {
            Err(ShapeError { violations })
        }
    }

    fn check(&self, value: &Value, path: &str, out: &mut Vec<Violation>) -> Value {
        match (self, value) {
            (Self::Any, _) => value.clone(),
            (Self::Void, Value::Null) => Value::Null,
            (Self::String(format), Value::String(text)) => {
                if format.is_some_and(|format| !format.matches(text)) {
                    out.push(Violation::new(path, self.describe(), format!("{text:?}")));
                }
                value.clone()
            }
            (Self::Integer, Value::Number(number)) => {
                let whole = number.is_i64()
                    || number.is_u64()
                    || number.as_f64().is_some_and(|f| f.fract() == 0.0);
                if !whole {
                    out.push(Violation::new(path, self.describe(), number.to_string()));
                }
                value.clone()
            }
            (Self::Number, Value::Number(_)) | (Self::Boolean, Value::Bool(_)) => value.clone(),
            (Self::Enum(values), Value::String(text)) => {
                if !values.iter().any(|allowed| allowed == text) {
                    out.push(Violation::new(path, self.describe(), format!("{text:?}")));
                }
                value.clone()
            }
            (Self::Array(item), Value::Array(items)) => Value::Array(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| item.check(entry, &format!("{path}[{index}]"), out))
                    .collect(),
            ),
            (Self::Object(fields), Value::Object(map)) => {
                Value::Object(check_fields(fields, map, path, out))
            }
            (Self::Record(inner), Value::Object(map)) => Value::Object(
                map.iter()
                    .map(|(key, entry)| {
                        (key.clone(), inner.check(entry, &format!("{path}.{key}"), out))
                    })
                    .collect(),
            ),
            (Self::OneOf(variants), _) => {
                for variant in variants {
                    let mut scratch = Vec::new();
                    let coerced = variant.check(value, path, &mut scratch);
                    if scratch.is_empty() {
                        return coerced;
                    }
                }
                out.push(Violation::new(path, self.describe(), kind_of(value)));
                value.clone()
            }
            _ => {
                out.push(Violation::new(path, self.describe(), kind_of(value)));
                value.clone()
            }
        }
    }
}

fn check_fields(
    fields: &[Field],
    map: &Map<String, Value>,
    path: &str,
    out: &mut Vec<Violation>,
) -> Map<String, Value> {
    let mut result = map.clone();

    for field in fields {
        let child = format!("{path}.{}", field.name);
        match map.get(&field.name) {
            None => {
                if let Some(default) = &field.default {
                    result.insert(field.name.clone(), default.clone());
                } else if field.presence.is_required() {
                    out.push(Violation::new(&child, field.shape.describe(), "missing"));
                }
            }
            Some(Value::Null) if field.presence.allows_null() => {}
            Some(present) => {
                let coerced = field.shape.check(present, &child, out);
                result.insert(field.name.clone(), coerced);
            }
        }
    }

    result
}

fn kind_of(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
    .to_string()
}

/// A single mismatch between a value and its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Location of the offending value (`$.data.attributes.name`, `$.data[0]`).
    pub path: String,
    /// What the shape expected there.
    pub expected: String,
    /// What was found instead.
    pub found: String,
}

impl Violation {
    fn new(path: &str, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, found {}",
            self.path, self.expected, self.found
        )
    }
}

/// A value failed to match its shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} violation(s): {}", .violations.len(), summarize(.violations))]
pub struct ShapeError {
    /// Every violation found, in document order.
    pub violations: Vec<Violation>,
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(err: &ShapeError) -> Vec<&str> {
        err.violations.iter().map(|v| v.path.as_str()).collect()
    }

    #[test]
    fn any_accepts_everything() {
        for value in [json!(null), json!(1), json!("x"), json!([1]), json!({"a": 1})] {
            assert_eq!(Shape::Any.validate(&value).unwrap(), value);
        }
    }

    #[test]
    fn void_accepts_only_null() {
        assert!(Shape::Void.validate(&json!(null)).is_ok());
        assert!(Shape::Void.validate(&json!({})).is_err());
    }

    #[test]
    fn primitive_mismatch_reports_kind() {
        let err = Shape::string().validate(&json!(42)).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::new("$", "string", "number")]
        );
    }

    #[test]
    fn integer_rejects_fractions() {
        assert!(Shape::integer().validate(&json!(3)).is_ok());
        assert!(Shape::integer().validate(&json!(3.0)).is_ok());
        assert!(Shape::integer().validate(&json!(3.5)).is_err());
        assert!(Shape::number().validate(&json!(3.5)).is_ok());
    }

    #[test]
    fn date_time_requires_offset() {
        let shape = Shape::date_time();
        assert!(shape.validate(&json!("2024-01-31T10:00:00+01:00")).is_ok());
        assert!(shape.validate(&json!("2024-01-31T10:00:00Z")).is_ok());

        let err = shape.validate(&json!("2024-01-31 10:00")).unwrap_err();
        assert_eq!(err.violations[0].expected, "string (date-time)");
    }

    #[test]
    fn other_string_formats() {
        assert!(Shape::date().validate(&json!("2024-02-29")).is_ok());
        assert!(Shape::date().validate(&json!("2023-02-29")).is_err());
        assert!(
            Shape::uuid()
                .validate(&json!("67e55044-10b1-426f-9247-bb680e5fe0c8"))
                .is_ok()
        );
        assert!(Shape::uuid().validate(&json!("not-a-uuid")).is_err());
        assert!(Shape::url().validate(&json!("https://demo.firefly-iii.org")).is_ok());
        assert!(Shape::url().validate(&json!("/relative")).is_err());
        assert!(Shape::email().validate(&json!("james@example.com")).is_ok());
        assert!(Shape::email().validate(&json!("james@localhost")).is_err());
        assert!(Shape::email().validate(&json!("@example.com")).is_err());
    }

    #[test]
    fn enumeration_reports_found_value() {
        let shape = Shape::enumeration(["withdrawal", "deposit"]);
        let err = shape.validate(&json!("refund")).unwrap_err();
        assert_eq!(err.violations[0].found, "\"refund\"");
        assert_eq!(err.violations[0].expected, "one of [withdrawal, deposit]");
    }

    #[test]
    fn object_keeps_unknown_keys() {
        let shape = Shape::object(vec![Field::new("name", Shape::string())]);
        let value = json!({"name": "Checking", "iban": "NL01"});
        assert_eq!(shape.validate(&value).unwrap(), value);
    }

    #[test]
    fn object_fills_defaults_only_when_absent() {
        let shape = Shape::object(vec![
            Field::new("active", Shape::boolean()).with_default(json!(true)),
        ]);

        assert_eq!(shape.validate(&json!({})).unwrap(), json!({"active": true}));
        assert_eq!(
            shape.validate(&json!({"active": false})).unwrap(),
            json!({"active": false})
        );
    }

    #[test]
    fn presence_rules() {
        let shape = Shape::object(vec![
            Field::new("required", Shape::string()),
            Field::new("optional", Shape::string()).optional(),
            Field::new("nullable", Shape::string()).nullable(),
            Field::new("nullish", Shape::string()).nullish(),
        ]);

        assert!(
            shape
                .validate(&json!({"required": "a", "nullable": null}))
                .is_ok()
        );

        let err = shape
            .validate(&json!({"optional": null, "nullish": null}))
            .unwrap_err();
        assert_eq!(paths(&err), vec!["$.required", "$.optional", "$.nullable"]);
        assert_eq!(err.violations[0].found, "missing");
        assert_eq!(err.violations[1].found, "null");
    }

    #[test]
    fn nested_paths() {
        let shape = Shape::object(vec![Field::new(
            "data",
            Shape::array(Shape::object(vec![Field::new(
                "attributes",
                Shape::object(vec![Field::new("amount", Shape::string())]),
            )])),
        )]);

        let err = shape
            .validate(&json!({"data": [
                {"attributes": {"amount": "1.00"}},
                {"attributes": {"amount": 2}}
            ]}))
            .unwrap_err();
        assert_eq!(paths(&err), vec!["$.data[1].attributes.amount"]);
    }

    #[test]
    fn record_checks_every_value() {
        let shape = Shape::record(Shape::array(Shape::string()));
        assert!(shape.validate(&json!({"name": ["taken"]})).is_ok());

        let err = shape.validate(&json!({"name": "taken"})).unwrap_err();
        assert_eq!(paths(&err), vec!["$.name"]);
    }

    #[test]
    fn one_of_takes_first_matching_variant() {
        let shape = Shape::one_of(vec![
            Shape::boolean(),
            Shape::string(),
            Shape::array(Shape::string()),
        ]);
        assert!(shape.validate(&json!(true)).is_ok());
        assert!(shape.validate(&json!(["a"])).is_ok());

        let err = shape.validate(&json!(12)).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].expected, "boolean | string | array of string");
    }

    #[test]
    fn error_display_lists_violations() {
        let shape = Shape::object(vec![Field::new("name", Shape::string())]);
        let err = shape.validate(&json!({})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "1 violation(s): $.name: expected string, found missing"
        );
    }
}
