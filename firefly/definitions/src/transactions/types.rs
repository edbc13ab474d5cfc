//! Transaction request and response types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Kind of a transaction split.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransactionType {
    Withdrawal,
    Deposit,
    Transfer,
    Reconciliation,
    #[serde(rename = "opening balance")]
    #[strum(serialize = "opening balance")]
    OpeningBalance,
}

/// Body of `storeTransaction`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionStore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_if_duplicate_hash: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_rules: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_title: Option<String>,
    pub transactions: Vec<TransactionSplitStore>,
}

/// One split of a new transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSplitStore {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// RFC 3339 timestamp.
    pub date: String,
    /// Decimal amount as a string (e.g. "12.50").
    pub amount: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TransactionSplitStore {
    /// A split moving `amount` between two accounts given by id.
    pub fn new(
        kind: TransactionType,
        date: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            date: date.into(),
            amount: amount.into(),
            description: description.into(),
            source_id: None,
            destination_id: None,
            category_name: None,
            notes: None,
        }
    }

    pub fn from_account(mut self, id: impl Into<String>) -> Self {
        self.source_id = Some(id.into());
        self
    }

    pub fn to_account(mut self, id: impl Into<String>) -> Self {
        self.destination_id = Some(id.into());
        self
    }
}

/// Attributes of a transaction group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub group_title: Option<String>,
    pub transactions: Vec<TransactionSplit>,
}

/// One split of a stored transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSplit {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: String,
    pub amount: String,
    pub description: String,
    pub source_id: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
    pub destination_id: Option<String>,
    #[serde(default)]
    pub destination_name: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Single;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn opening_balance_has_a_space() {
        assert_eq!(TransactionType::OpeningBalance.to_string(), "opening balance");
        assert_eq!(
            TransactionType::from_str("opening balance").unwrap(),
            TransactionType::OpeningBalance
        );
        assert_eq!(
            serde_json::to_value(TransactionType::OpeningBalance).unwrap(),
            json!("opening balance")
        );
    }

    #[test]
    fn store_serializes_only_set_fields() {
        let store = TransactionStore {
            transactions: vec![
                TransactionSplitStore::new(
                    TransactionType::Withdrawal,
                    "2024-03-01T12:00:00Z",
                    "12.50",
                    "Groceries",
                )
                .from_account("1")
                .to_account("7"),
            ],
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&store).unwrap(),
            json!({"transactions": [{
                "type": "withdrawal",
                "date": "2024-03-01T12:00:00Z",
                "amount": "12.50",
                "description": "Groceries",
                "source_id": "1",
                "destination_id": "7"
            }]})
        );
    }

    #[test]
    fn stored_transaction_deserialization() {
        let single: Single<Transaction> = serde_json::from_value(json!({"data": {
            "type": "transactions",
            "id": "15",
            "attributes": {"transactions": [{
                "type": "deposit",
                "date": "2024-03-01T12:00:00+00:00",
                "amount": "1000.00",
                "description": "Salary",
                "source_id": "3",
                "source_name": "Employer",
                "destination_id": "1"
            }]},
            "links": {}
        }}))
        .unwrap();

        let split = &single.data.attributes.transactions[0];
        assert_eq!(split.kind, TransactionType::Deposit);
        assert_eq!(split.source_name.as_deref(), Some("Employer"));
        assert!(split.destination_name.is_none());
    }
}
