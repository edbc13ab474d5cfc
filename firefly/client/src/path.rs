//! Path template rendering and extraction.
//!
//! Placeholders are written `{name}`. Rendered values are percent-encoded so
//! that only RFC 3986 unreserved characters stay verbatim; a `/` inside a
//! value therefore never creates a new segment, and [`PathTemplate::extract`]
//! recovers the original values from a rendered path.
//!
//! ## Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use firefly_client::PathTemplate;
//!
//! let template = PathTemplate::new("/v1/currencies/{code}");
//! let values = BTreeMap::from([("code".to_string(), "EUR/old".to_string())]);
//!
//! let path = template.render(&values).unwrap();
//! assert_eq!(path, "/v1/currencies/EUR%2Fold");
//! assert_eq!(template.extract(&path), Some(values));
//! ```

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use thiserror::Error;

/// Everything except RFC 3986 unreserved characters.
const PATH_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A placeholder had no value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no value for path placeholder {{{name}}}")]
pub struct MissingPlaceholder {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// A borrowed `{name}` path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathTemplate<'a> {
    template: &'a str,
}

impl<'a> PathTemplate<'a> {
    pub fn new(template: &'a str) -> Self {
        Self { template }
    }

    pub fn as_str(&self) -> &'a str {
        self.template
    }

    /// Placeholder names in order of appearance.
    pub fn params(&self) -> Vec<&'a str> {
        tokens(self.template)
            .into_iter()
            .filter_map(|token| match token {
                Token::Placeholder(name) => Some(name),
                Token::Literal(_) => None,
            })
            .collect()
    }

    /// Substitutes every placeholder with its percent-encoded value.
    ///
    /// Values without a matching placeholder are ignored.
    pub fn render<V: AsRef<str>>(
        &self,
        values: &BTreeMap<String, V>,
    ) -> Result<String, MissingPlaceholder> {
        let mut rendered = String::with_capacity(self.template.len());

        for token in tokens(self.template) {
            match token {
                Token::Literal(text) => rendered.push_str(text),
                Token::Placeholder(name) => {
                    let value = values.get(name).ok_or_else(|| MissingPlaceholder {
                        name: name.to_string(),
                    })?;
                    rendered.extend(utf8_percent_encode(value.as_ref(), PATH_VALUE));
                }
            }
        }

        Ok(rendered)
    }

    /// Recovers placeholder values from a rendered path.
    ///
    /// Returns `None` when the path does not fit the template or a value is
    /// not valid percent-encoded UTF-8.
    pub fn extract(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let path = path.split_once('?').map_or(path, |(path, _)| path);
        let template: Vec<&str> = self.template.split('/').collect();
        let concrete: Vec<&str> = path.split('/').collect();

        if template.len() != concrete.len() {
            return None;
        }

        let mut values = BTreeMap::new();
        for (expected, actual) in template.into_iter().zip(concrete) {
            match tokens(expected).as_slice() {
                [] => {
                    if !actual.is_empty() {
                        return None;
                    }
                }
                [Token::Literal(text)] => {
                    if *text != actual {
                        return None;
                    }
                }
                tokens => {
                    let (name, value) = extract_segment(tokens, actual)?;
                    values.insert(name.to_string(), value);
                }
            }
        }

        Some(values)
    }
}

/// Matches one segment holding a single placeholder, optionally wrapped in
/// literal text.
fn extract_segment<'t>(tokens: &[Token<'t>], actual: &str) -> Option<(&'t str, String)> {
    let (prefix, name, suffix) = match tokens {
        [Token::Placeholder(name)] => ("", *name, ""),
        [Token::Literal(prefix), Token::Placeholder(name)] => (*prefix, *name, ""),
        [Token::Placeholder(name), Token::Literal(suffix)] => ("", *name, *suffix),
        [
            Token::Literal(prefix),
            Token::Placeholder(name),
            Token::Literal(suffix),
        ] => (*prefix, *name, *suffix),
        _ => return None,
    };

    let encoded = actual.strip_prefix(prefix)?.strip_suffix(suffix)?;
    let value = percent_decode_str(encoded).decode_utf8().ok()?;
    Some((name, value.into_owned()))
}

fn tokens(template: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start + 1..].find('}') else {
            break;
        };
        if start > 0 {
            tokens.push(Token::Literal(&rest[..start]));
        }
        tokens.push(Token::Placeholder(&rest[start + 1..start + 1 + len]));
        rest = &rest[start + len + 2..];
    }

    if !rest.is_empty() {
        tokens.push(Token::Literal(rest));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn params_in_order() {
        let template = PathTemplate::new("/v1/webhooks/{id}/messages/{messageId}");
        assert_eq!(template.params(), vec!["id", "messageId"]);
    }

    #[test]
    fn render_substitutes_every_placeholder() {
        let template = PathTemplate::new("/v1/webhooks/{id}/trigger-transaction/{transactionId}");
        let path = template
            .render(&values(&[("id", "3"), ("transactionId", "77"), ("unused", "x")]))
            .unwrap();
        assert_eq!(path, "/v1/webhooks/3/trigger-transaction/77");
    }

    #[test]
    fn render_keeps_unreserved_characters() {
        let template = PathTemplate::new("/v1/preferences/{name}");
        let path = template.render(&values(&[("name", "a-b.c_d~e")])).unwrap();
        assert_eq!(path, "/v1/preferences/a-b.c_d~e");
    }

    #[test]
    fn render_encodes_reserved_characters() {
        let template = PathTemplate::new("/v1/tags/{tag}");
        let path = template
            .render(&values(&[("tag", "food & drink/2024?#")]))
            .unwrap();
        assert_eq!(path, "/v1/tags/food%20%26%20drink%2F2024%3F%23");
    }

    #[test]
    fn render_reports_missing_placeholder() {
        let template = PathTemplate::new("/v1/accounts/{id}");
        let err = template.render(&BTreeMap::<String, String>::new()).unwrap_err();
        assert_eq!(err.name, "id");
    }

    #[test]
    fn extract_reverses_render() {
        let template = PathTemplate::new("/v1/webhooks/{id}/messages/{messageId}");
        let original = values(&[("id", "ü/1"), ("messageId", "100% sure")]);
        let path = template.render(&original).unwrap();
        assert_eq!(template.extract(&path), Some(original));
    }

    #[test]
    fn extract_rejects_other_paths() {
        let template = PathTemplate::new("/v1/accounts/{id}");
        assert_eq!(template.extract("/v1/accounts"), None);
        assert_eq!(template.extract("/v1/tags/4"), None);
        assert_eq!(template.extract("/v1/accounts/4/transactions"), None);
    }

    #[test]
    fn extract_handles_affixes_and_query() {
        let template = PathTemplate::new("/v1/exports/{name}.csv");
        assert_eq!(
            template.extract("/v1/exports/march%202024.csv?x=1"),
            Some(values(&[("name", "march 2024")]))
        );
    }
}
