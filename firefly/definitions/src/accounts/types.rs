//! Account response types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Short account type, as stored on an account.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ShortAccountType {
    Asset,
    Expense,
    Import,
    Revenue,
    Cash,
    Liability,
    Liabilities,
    InitialBalance,
    Reconciliation,
}

/// Values accepted by the `type` filter of account listings.
///
/// Only the short forms are modelled; the long names ("Asset account") are
/// accepted by the server as well but add nothing for callers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccountTypeFilter {
    All,
    Asset,
    Cash,
    Expense,
    Revenue,
    Special,
    Hidden,
    Liability,
    Liabilities,
}

/// Attributes of an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ShortAccountType,
    #[serde(default = "enabled")]
    pub active: bool,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub current_balance: Option<String>,
    #[serde(default)]
    pub iban: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default = "enabled")]
    pub include_net_worth: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

fn enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{List, Single};
    use serde_json::json;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn short_type_wire_names() {
        assert_eq!(ShortAccountType::InitialBalance.to_string(), "initial-balance");
        assert_eq!(
            serde_json::to_value(ShortAccountType::Asset).unwrap(),
            json!("asset")
        );
        assert_eq!(ShortAccountType::iter().count(), 9);
    }

    #[test]
    fn type_filter_parses_lowercase() {
        assert_eq!(
            AccountTypeFilter::from_str("expense").unwrap(),
            AccountTypeFilter::Expense
        );
        assert!(AccountTypeFilter::from_str("Expense").is_err());
    }

    #[test]
    fn single_account_defaults() {
        let single: Single<Account> = serde_json::from_value(json!({
            "data": {
                "type": "accounts",
                "id": "42",
                "attributes": {"name": "Checking", "type": "asset"}
            }
        }))
        .unwrap();

        assert_eq!(single.data.id, "42");
        assert_eq!(single.data.attributes.kind, ShortAccountType::Asset);
        assert!(single.data.attributes.active);
        assert!(single.data.attributes.include_net_worth);
    }

    #[test]
    fn account_list() {
        let list: List<Account> = serde_json::from_value(json!({
            "data": [
                {
                    "type": "accounts",
                    "id": "1",
                    "attributes": {"name": "Checking", "type": "asset", "active": false}
                },
                {
                    "type": "accounts",
                    "id": "2",
                    "attributes": {"name": "Groceries", "type": "expense"}
                }
            ],
            "meta": {"pagination": {"total": 2}}
        }))
        .unwrap();

        assert_eq!(list.data.len(), 2);
        assert!(!list.data[0].attributes.active);
        assert_eq!(list.data[1].attributes.kind, ShortAccountType::Expense);
    }
}
