//! System information response types.

use serde::{Deserialize, Serialize};

/// Response of `getAbout`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    #[serde(default)]
    pub data: Option<SystemInfoData>,
}

/// Version details of the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfoData {
    /// Firefly III version (e.g. "6.1.0").
    pub version: Option<String>,
    /// API version (e.g. "2.0.12").
    pub api_version: Option<String>,
    pub php_version: Option<String>,
    pub os: Option<String>,
    /// Database driver.
    pub driver: Option<String>,
}

/// Attributes of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default)]
    pub blocked: Option<bool>,
    #[serde(default)]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn system_info_deserialization() {
        let info: SystemInfo = serde_json::from_value(json!({
            "data": {"version": "6.1.0", "api_version": "2.0.12", "os": "Linux", "driver": "mysql"}
        }))
        .unwrap();

        let data = info.data.unwrap();
        assert_eq!(data.version.as_deref(), Some("6.1.0"));
        assert!(data.php_version.is_none());
    }

    #[test]
    fn empty_system_info() {
        let info: SystemInfo = serde_json::from_value(json!({})).unwrap();
        assert!(info.data.is_none());
    }
}
