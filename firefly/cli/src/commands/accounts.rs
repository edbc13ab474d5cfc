//! Account listing and name resolution.

use firefly_client::{ApiError, CallParams, FireflyClient};
use firefly_definitions::List;
use firefly_definitions::accounts::{Account, AccountTypeFilter};
use tracing::debug;

use super::failure_message;
use crate::error::CliError;

/// An account a transaction can move money from or to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountChoice {
    pub id: String,
    pub name: String,
}

/// Fetches every account of one type, following pagination.
pub async fn list(
    client: &FireflyClient,
    kind: AccountTypeFilter,
) -> Result<Vec<AccountChoice>, CliError> {
    let mut choices = Vec::new();
    let mut page: u64 = 1;

    loop {
        let envelope = client
            .accounts()
            .list_account(
                CallParams::new()
                    .query("type", kind.to_string())
                    .query("page", page),
            )
            .await?;

        if envelope.status != 200 {
            return Err(CliError::Fetch {
                what: "accounts",
                message: failure_message(envelope),
            });
        }

        let listing: List<Account> = envelope.json().map_err(ApiError::from)?;
        choices.extend(listing.data.into_iter().map(|account| AccountChoice {
            id: account.id,
            name: account.attributes.name,
        }));

        let more = listing.meta.pagination.is_some_and(|p| {
            matches!(
                (p.current_page, p.total_pages),
                (Some(current), Some(total)) if current < total
            )
        });
        if !more {
            break;
        }
        page += 1;
    }

    debug!(kind = %kind, count = choices.len(), "listed accounts");
    Ok(choices)
}

/// Finds the account `input` refers to, by id first and then by name.
///
/// Name matching ignores case and surrounding whitespace.
pub fn resolve<'a>(choices: &'a [AccountChoice], input: &str) -> Option<&'a AccountChoice> {
    let input = input.trim();
    choices
        .iter()
        .find(|choice| choice.id == input)
        .or_else(|| {
            choices
                .iter()
                .find(|choice| choice.name.eq_ignore_ascii_case(input))
        })
}

/// Prints the accounts of one type as `id<TAB>name` lines.
pub async fn run(client: &FireflyClient, kind: AccountTypeFilter) -> Result<(), CliError> {
    for choice in list(client, kind).await? {
        println!("{}\t{}", choice.id, choice.name);
    }
    Ok(())
}
