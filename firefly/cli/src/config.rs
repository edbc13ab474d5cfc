//! Connection settings for the Firefly III server.

use std::fmt;
use std::time::Duration;

use firefly_client::{ConfigError, FireflyClient};
use url::Url;

use crate::error::CliError;

pub const BASE_URL_ENV: &str = "FIREFLY_BASE_URL";
pub const API_KEY_ENV: &str = "FIREFLY_API_KEY";

/// Validated server location and credentials.
#[derive(Clone)]
pub struct Settings {
    /// API root, including its path prefix (e.g. `https://firefly.example.com/api`).
    pub base_url: Url,
    api_key: String,
    pub timeout: Duration,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[redacted]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Settings {
    /// Validates the raw settings from flags or the environment.
    pub fn resolve(
        base_url: Option<&str>,
        api_key: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, CliError> {
        let base_url = base_url
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(CliError::MissingSetting {
                flag: "--base-url",
                env: BASE_URL_ENV,
            })?;
        let api_key = api_key
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(CliError::MissingSetting {
                flag: "--api-key",
                env: API_KEY_ENV,
            })?;

        let base_url = Url::parse(base_url).map_err(ConfigError::from)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "scheme must be http or https",
            }
            .into());
        }

        Ok(Self {
            base_url,
            api_key: api_key.to_string(),
            timeout,
        })
    }

    /// Builds the API client for these settings.
    pub fn client(&self) -> Result<FireflyClient, CliError> {
        let client = FireflyClient::builder(self.base_url.clone(), self.api_key.clone())
            .timeout(self.timeout)
            .build()?;
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(30);

    #[test]
    fn resolves_valid_settings() {
        let settings = Settings::resolve(
            Some("https://firefly.example.com/api"),
            Some("secret"),
            TIMEOUT,
        )
        .unwrap();
        assert_eq!(settings.base_url.path(), "/api");
        assert!(settings.client().is_ok());
    }

    #[test]
    fn missing_base_url_names_the_flag() {
        let err = Settings::resolve(None, Some("secret"), TIMEOUT).unwrap_err();
        assert!(matches!(
            err,
            CliError::MissingSetting {
                flag: "--base-url",
                ..
            }
        ));
    }

    #[test]
    fn blank_api_key_is_missing() {
        let err = Settings::resolve(Some("https://firefly.example.com"), Some("  "), TIMEOUT)
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::MissingSetting {
                env: API_KEY_ENV,
                ..
            }
        ));
    }

    #[test]
    fn rejects_malformed_and_non_http_urls() {
        let err = Settings::resolve(Some("not a url"), Some("secret"), TIMEOUT).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::InvalidUrl(_))));

        let err = Settings::resolve(Some("ftp://firefly.example.com"), Some("secret"), TIMEOUT)
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn debug_hides_the_key() {
        let settings =
            Settings::resolve(Some("https://firefly.example.com"), Some("secret"), TIMEOUT)
                .unwrap();
        let debug = format!("{settings:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[redacted]"));
    }
}
