//! Client configuration errors.

use thiserror::Error;

/// Errors in client configuration.
///
/// These surface from [`FireflyClientBuilder::build`](crate::FireflyClientBuilder::build)
/// and from the builder's header setters.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL parsed but cannot serve as an API base.
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A required configuration field is missing.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A default header has an invalid name or value.
    #[error("Invalid default header {name}: {message}")]
    InvalidHeader {
        /// The header name as given.
        name: String,
        /// Description of the problem.
        message: String,
    },
}

impl ConfigError {
    /// Creates a missing field error.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field() {
        let err = ConfigError::missing_field("base_url");
        assert_eq!(err.to_string(), "Missing required field: base_url");
    }

    #[test]
    fn test_invalid_url() {
        let url_err = url::Url::parse("not-a-url").unwrap_err();
        let err = ConfigError::InvalidUrl(url_err);
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ConfigError::InvalidBaseUrl {
            url: "mailto:me@example.com".to_string(),
            reason: "scheme must be http or https",
        };
        assert_eq!(
            err.to_string(),
            "Invalid base URL mailto:me@example.com: scheme must be http or https"
        );
    }
}
