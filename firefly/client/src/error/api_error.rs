//! Top-level API error type.

use super::{ClientError, ConfigError, ServerError, UsageError, ValidationError};
use thiserror::Error;

/// Top-level error type for all dispatcher operations.
///
/// ## Examples
///
/// ```
/// use firefly_client::error::{ApiError, UsageError};
///
/// fn describe(err: &ApiError) -> &'static str {
///     match err {
///         ApiError::Usage(_) => "fix the call",
///         ApiError::Client(_) => "network trouble",
///         ApiError::Validation(_) => "server broke its contract",
///         ApiError::Server(_) => "server said no",
///         ApiError::Config(_) => "fix the configuration",
///     }
/// }
///
/// let err: ApiError = UsageError::missing_path("getAccount", "id").into();
/// assert_eq!(describe(&err), "fix the call");
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The call could not be built from the given parameters.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// HTTP client errors (network, timeout, cancellation).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Response did not decode or did not match its declared shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Non-success status surfaced through `error_for_status`.
    #[error(transparent)]
    Server(#[from] ServerError),

    /// Client configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Returns the HTTP status involved, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Client(err) => err.status_code(),
            Self::Validation(ValidationError::ContractViolation { status, .. }) => Some(*status),
            Self::Server(err) => Some(err.status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_usage_error() {
        let api_err: ApiError = UsageError::missing_path("getAccount", "id").into();
        assert!(matches!(api_err, ApiError::Usage(_)));
        assert_eq!(api_err.status_code(), None);
    }

    #[test]
    fn test_from_client_error() {
        let api_err: ApiError = ClientError::Cancelled {
            route: "listAccount".to_string(),
        }
        .into();
        assert!(matches!(api_err, ApiError::Client(_)));
    }

    #[test]
    fn test_error_display_is_transparent() {
        let err = ApiError::Config(ConfigError::missing_field("api_key"));
        assert_eq!(err.to_string(), "Missing required field: api_key");
    }

    #[test]
    fn test_status_code_from_server_error() {
        let err = ApiError::Server(ServerError {
            route: "getAccount".to_string(),
            status: 404,
            body: Default::default(),
        });
        assert_eq!(err.status_code(), Some(404));
    }
}
