//! Errors reported by the `firefly` binary.

use firefly_client::{ApiError, ConfigError};
use thiserror::Error;

use crate::form::FormErrors;

#[derive(Debug, Error)]
pub enum CliError {
    /// A connection setting was not given on the command line or in the environment.
    #[error("Missing {flag} (or set {env})")]
    MissingSetting {
        flag: &'static str,
        env: &'static str,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0}")]
    Form(#[from] FormErrors),

    #[error("No {kind} account matches \"{name}\"")]
    UnknownAccount { kind: String, name: String },

    #[error("Failed to fetch {what}: {message}")]
    Fetch { what: &'static str, message: String },

    /// The server answered `storeTransaction` with something other than 200.
    #[error("Fail to create transaction: {message} (HTTP {status})")]
    Rejected { status: u16, message: String },
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Input problems exit with `2`, everything that happened after a
    /// request was attempted exits with `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingSetting { .. } | Self::Config(_) | Self::Form(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_problems_exit_with_two() {
        let err = CliError::MissingSetting {
            flag: "--api-key",
            env: "FIREFLY_API_KEY",
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Missing --api-key (or set FIREFLY_API_KEY)");
    }

    #[test]
    fn rejection_exits_with_one() {
        let err = CliError::Rejected {
            status: 422,
            message: "The given data was invalid.".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "Fail to create transaction: The given data was invalid. (HTTP 422)"
        );
    }
}
