//! Response parsing and contract errors.

use firefly_define::Violation;
use thiserror::Error;

/// The response does not honor the route's declared contract.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// JSON parsing failed, either on a JSON content type or in a typed decode.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The decoded body does not match the shape declared for its status.
    #[error("{route} returned HTTP {status} violating its contract: {}", join(.violations))]
    ContractViolation {
        route: String,
        status: u16,
        violations: Vec<Violation>,
    },

    /// A typed decode was requested on a body that is not JSON.
    #[error("Expected a JSON body, got {found}")]
    NotJson { found: &'static str },
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Returns `true` if this is a parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::JsonParse(_))
    }

    /// Returns the violations of a contract error.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::ContractViolation { violations, .. } => violations,
            _ => &[],
        }
    }
}
