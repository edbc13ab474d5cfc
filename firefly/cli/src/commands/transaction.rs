//! Withdrawals, deposits and transfers.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use firefly_client::{ApiError, CallParams, FireflyClient, RequestBody};
use firefly_definitions::accounts::AccountTypeFilter;
use firefly_definitions::transactions::{TransactionSplitStore, TransactionStore, TransactionType};
use tracing::{debug, info};

use super::accounts::{self, AccountChoice};
use super::failure_message;
use crate::error::CliError;
use crate::form::TransactionForm;

/// Which form is being submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Withdraw,
    Deposit,
    Transfer,
}

impl Flow {
    pub fn transaction_type(self) -> TransactionType {
        match self {
            Self::Withdraw => TransactionType::Withdrawal,
            Self::Deposit => TransactionType::Deposit,
            Self::Transfer => TransactionType::Transfer,
        }
    }

    /// Account type money is taken from.
    pub fn source_accounts(self) -> AccountTypeFilter {
        match self {
            Self::Withdraw | Self::Transfer => AccountTypeFilter::Asset,
            Self::Deposit => AccountTypeFilter::Revenue,
        }
    }

    /// Account type money goes to.
    pub fn target_accounts(self) -> AccountTypeFilter {
        match self {
            Self::Withdraw => AccountTypeFilter::Expense,
            Self::Deposit | Self::Transfer => AccountTypeFilter::Asset,
        }
    }
}

/// Accepts an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC).
pub fn parse_date(value: &str) -> Result<String, String> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.to_rfc3339_opts(SecondsFormat::Secs, true));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| {
            midnight
                .and_utc()
                .to_rfc3339_opts(SecondsFormat::Secs, true)
        })
        .ok_or_else(|| format!("expected an RFC 3339 timestamp or YYYY-MM-DD, got \"{value}\""))
}

/// Current time in the millisecond `Z` form.
pub fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Builds the store body for one split between two resolved accounts.
pub fn store_body(
    flow: Flow,
    form: &TransactionForm,
    source: &AccountChoice,
    target: &AccountChoice,
    date: String,
) -> TransactionStore {
    let split = TransactionSplitStore::new(
        flow.transaction_type(),
        date,
        form.amount.trim(),
        form.description.trim(),
    )
    .from_account(source.id.clone())
    .to_account(target.id.clone());

    TransactionStore {
        transactions: vec![split],
        ..Default::default()
    }
}

async fn pick(
    client: &FireflyClient,
    kind: AccountTypeFilter,
    input: &str,
) -> Result<AccountChoice, CliError> {
    let choices = accounts::list(client, kind).await?;
    accounts::resolve(&choices, input)
        .cloned()
        .ok_or_else(|| CliError::UnknownAccount {
            kind: kind.to_string(),
            name: input.trim().to_string(),
        })
}

/// Stores the transaction; the form must already be validated.
pub async fn submit(
    client: &FireflyClient,
    flow: Flow,
    form: &TransactionForm,
    date: Option<String>,
) -> Result<(), CliError> {
    let source = pick(client, flow.source_accounts(), &form.source).await?;
    let target = pick(client, flow.target_accounts(), &form.target).await?;
    debug!(source = %source.id, target = %target.id, "resolved accounts");

    let body = store_body(flow, form, &source, &target, date.unwrap_or_else(now));
    let envelope = client
        .transactions()
        .store_transaction(
            CallParams::new()
                .body(RequestBody::json(&body).map_err(ApiError::from)?)
                .validate(false),
        )
        .await?;

    if envelope.status != 200 {
        let status = envelope.status;
        return Err(CliError::Rejected {
            status,
            message: failure_message(envelope),
        });
    }

    info!(kind = %flow.transaction_type(), "transaction stored");
    println!("Transaction created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn account(id: &str, name: &str) -> AccountChoice {
        AccountChoice {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn flows_pick_account_types() {
        assert_eq!(
            (Flow::Withdraw.source_accounts(), Flow::Withdraw.target_accounts()),
            (AccountTypeFilter::Asset, AccountTypeFilter::Expense)
        );
        assert_eq!(
            (Flow::Deposit.source_accounts(), Flow::Deposit.target_accounts()),
            (AccountTypeFilter::Revenue, AccountTypeFilter::Asset)
        );
        assert_eq!(
            (Flow::Transfer.source_accounts(), Flow::Transfer.target_accounts()),
            (AccountTypeFilter::Asset, AccountTypeFilter::Asset)
        );
    }

    #[test]
    fn store_body_has_one_split() {
        let form = TransactionForm {
            description: " Groceries ".to_string(),
            source: "Checking".to_string(),
            target: "Supermarket".to_string(),
            amount: "12.50".to_string(),
        };
        let body = store_body(
            Flow::Withdraw,
            &form,
            &account("1", "Checking"),
            &account("5", "Supermarket"),
            "2026-10-17T09:30:00Z".to_string(),
        );

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"transactions": [{
                "type": "withdrawal",
                "date": "2026-10-17T09:30:00Z",
                "amount": "12.50",
                "description": "Groceries",
                "source_id": "1",
                "destination_id": "5"
            }]})
        );
    }

    #[test]
    fn parse_date_accepts_both_forms() {
        assert_eq!(parse_date("2026-10-17").unwrap(), "2026-10-17T00:00:00Z");
        assert_eq!(
            parse_date("2026-10-17T09:30:00+02:00").unwrap(),
            "2026-10-17T09:30:00+02:00"
        );
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn now_is_rfc3339_with_millis() {
        let stamp = now();
        assert!(stamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
