//! Validation of transaction input before anything is sent.

use std::fmt;

use thiserror::Error;

pub const REQUIRED: &str = "This is required field";
pub const NOT_A_NUMBER: &str = "Must be number";

/// Raw input of a withdrawal, deposit or transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    pub description: String,
    pub source: String,
    pub target: String,
    pub amount: String,
}

/// A rejected field and the reason shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every problem found in a form, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct FormErrors(pub Vec<FieldError>);

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl TransactionForm {
    /// Checks all fields, collecting every failure rather than stopping at the first.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("description", &self.description),
            ("source", &self.source),
            ("target", &self.target),
        ] {
            if value.trim().is_empty() {
                errors.push(FieldError {
                    field,
                    message: REQUIRED,
                });
            }
        }

        if self.amount.trim().is_empty() {
            errors.push(FieldError {
                field: "amount",
                message: REQUIRED,
            });
        } else if leading_integer(&self.amount).is_none() {
            errors.push(FieldError {
                field: "amount",
                message: NOT_A_NUMBER,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FormErrors(errors))
        }
    }
}

/// Parses the integer a value starts with, after optional whitespace and sign.
///
/// Trailing characters are ignored, so `"12.50"` and `"7 EUR"` both yield a
/// number while `"abc"` and `"-"` do not.
pub fn leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    // Overlong digit runs saturate; only the presence of a number matters here.
    Some(digits.parse::<i64>().unwrap_or(i64::MAX) * sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(amount: &str) -> TransactionForm {
        TransactionForm {
            description: "Groceries".to_string(),
            source: "Checking".to_string(),
            target: "Supermarket".to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(form("12.50").validate().is_ok());
    }

    #[test]
    fn empty_amount_is_required() {
        let err = form("").validate().unwrap_err();
        assert_eq!(
            err.0,
            vec![FieldError {
                field: "amount",
                message: REQUIRED
            }]
        );
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let err = form("abc").validate().unwrap_err();
        assert_eq!(err.to_string(), "amount: Must be number");
    }

    #[test]
    fn all_missing_fields_are_reported() {
        let err = TransactionForm::default().validate().unwrap_err();
        let fields: Vec<_> = err.0.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["description", "source", "target", "amount"]);
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let mut input = form("5");
        input.description = "   ".to_string();
        assert_eq!(input.validate().unwrap_err().0[0].field, "description");
    }

    #[test]
    fn leading_integer_ignores_trailing_text() {
        assert_eq!(leading_integer("12.50"), Some(12));
        assert_eq!(leading_integer("  7 EUR"), Some(7));
        assert_eq!(leading_integer("-3"), Some(-3));
        assert_eq!(leading_integer("+4"), Some(4));
        assert_eq!(leading_integer(".5"), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer("abc"), None);
    }
}
