//! Query string encoding.

use url::form_urlencoded;

use crate::call::QueryValue;

/// How list-valued query parameters are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArrayEncoding {
    /// `type[]=a&type[]=b`, the convention Firefly III reads.
    #[default]
    Brackets,
    /// `type=a&type=b`.
    Repeat,
}

/// Encodes query pairs in order. Returns `None` when nothing is encoded.
///
/// ## Examples
///
/// ```
/// use firefly_client::{ArrayEncoding, QueryValue};
/// use firefly_client::query::encode;
///
/// let pairs = vec![
///     ("types".to_string(), QueryValue::from(vec!["asset", "cash"])),
///     ("limit".to_string(), QueryValue::from(10u32)),
/// ];
///
/// assert_eq!(
///     encode(&pairs, ArrayEncoding::Brackets).as_deref(),
///     Some("types%5B%5D=asset&types%5B%5D=cash&limit=10")
/// );
/// assert_eq!(
///     encode(&pairs, ArrayEncoding::Repeat).as_deref(),
///     Some("types=asset&types=cash&limit=10")
/// );
/// ```
pub fn encode(pairs: &[(String, QueryValue)], encoding: ArrayEncoding) -> Option<String> {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut written = false;

    for (name, value) in pairs {
        match value {
            QueryValue::One(value) => {
                serializer.append_pair(name, value);
                written = true;
            }
            QueryValue::Many(values) => {
                let key = match encoding {
                    ArrayEncoding::Brackets => format!("{name}[]"),
                    ArrayEncoding::Repeat => name.clone(),
                };
                for value in values {
                    serializer.append_pair(&key, value);
                    written = true;
                }
            }
        }
    }

    written.then(|| serializer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, value: impl Into<QueryValue>) -> (String, QueryValue) {
        (name.to_string(), value.into())
    }

    #[test]
    fn empty_yields_none() {
        assert_eq!(encode(&[], ArrayEncoding::Brackets), None);
        assert_eq!(
            encode(&[pair("type", Vec::<String>::new())], ArrayEncoding::Brackets),
            None
        );
    }

    #[test]
    fn scalars_are_form_encoded() {
        let pairs = [pair("query", "coffee & cake"), pair("limit", 5u32)];
        assert_eq!(
            encode(&pairs, ArrayEncoding::Brackets).as_deref(),
            Some("query=coffee+%26+cake&limit=5")
        );
    }

    #[test]
    fn brackets_by_default() {
        let pairs = [pair("type", vec!["asset", "expense"])];
        let encoded = encode(&pairs, ArrayEncoding::default()).unwrap();
        let decoded: Vec<(String, String)> = form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(
            decoded,
            vec![
                ("type[]".to_string(), "asset".to_string()),
                ("type[]".to_string(), "expense".to_string()),
            ]
        );
    }

    #[test]
    fn repeat_keeps_the_plain_key() {
        let pairs = [pair("type", vec!["asset", "expense"])];
        assert_eq!(
            encode(&pairs, ArrayEncoding::Repeat).as_deref(),
            Some("type=asset&type=expense")
        );
    }
}
