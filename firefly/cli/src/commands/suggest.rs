//! Transaction description suggestions.

use firefly_client::{ApiError, CallParams, FireflyClient};
use firefly_definitions::autocomplete::AutocompleteTransaction;
use tracing::debug;

use crate::error::CliError;

/// Descriptions of earlier transactions matching `input`, followed by `input` itself.
///
/// Any status other than 200 yields just `input`.
pub async fn suggestions(client: &FireflyClient, input: &str) -> Result<Vec<String>, CliError> {
    let envelope = client
        .autocomplete()
        .get_transactions_ac(CallParams::new().query("query", input))
        .await?;

    if envelope.status != 200 {
        debug!(status = envelope.status, "autocomplete unavailable, echoing input");
        return Ok(vec![input.to_string()]);
    }

    let matches: Vec<AutocompleteTransaction> = envelope.json().map_err(ApiError::from)?;
    let mut names: Vec<String> = matches.into_iter().map(|m| m.name).collect();
    names.push(input.to_string());
    Ok(names)
}

pub async fn run(client: &FireflyClient, input: &str) -> Result<(), CliError> {
    for name in suggestions(client, input).await? {
        println!("{name}");
    }
    Ok(())
}
