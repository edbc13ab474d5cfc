//! Server version information.

use firefly_client::{ApiError, CallParams, FireflyClient};
use firefly_definitions::about::{SystemInfo, SystemInfoData};

use crate::error::CliError;

/// `label: value` lines for the fields the server reported.
pub fn describe(info: &SystemInfoData) -> Vec<String> {
    [
        ("Version", &info.version),
        ("API version", &info.api_version),
        ("PHP version", &info.php_version),
        ("OS", &info.os),
        ("Database driver", &info.driver),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_ref().map(|v| format!("{label}: {v}")))
    .collect()
}

pub async fn run(client: &FireflyClient) -> Result<(), CliError> {
    let envelope = client
        .about()
        .get_about(CallParams::new())
        .await?
        .error_for_status()?;
    let info: SystemInfo = envelope.json().map_err(ApiError::from)?;

    let lines = info.data.as_ref().map(describe).unwrap_or_default();
    if lines.is_empty() {
        println!("The server reported no version information");
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_skips_missing_fields() {
        let info = SystemInfoData {
            version: Some("6.1.0".to_string()),
            api_version: Some("2.0.12".to_string()),
            driver: Some("pgsql".to_string()),
            ..Default::default()
        };
        assert_eq!(
            describe(&info),
            ["Version: 6.1.0", "API version: 2.0.12", "Database driver: pgsql"]
        );
    }
}
