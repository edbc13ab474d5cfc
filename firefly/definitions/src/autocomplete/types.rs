//! Autocomplete response types.

use serde::{Deserialize, Serialize};

/// Item of `getTransactionsAc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteTransaction {
    pub id: String,
    #[serde(default)]
    pub transaction_group_id: Option<String>,
    pub name: String,
    pub description: String,
}

/// Item of `getAccountsAc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteAccount {
    pub id: String,
    pub name: String,
    pub name_with_balance: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub currency_code: String,
}
