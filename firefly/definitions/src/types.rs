//! Response types shared by every resource group.
//!
//! Read routes return JSON:API envelopes; these generic wrappers let each
//! resource declare only its attribute struct.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Error body returned with 400, 401, 404, 422 and 500 responses.
///
/// `errors` is only sent with 422 responses and maps a field name to its
/// validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ErrorResponse {
    /// Returns the messages reported for `field`.
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }
}

/// A JSON:API resource object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<A> {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub attributes: A,
}

/// `{data: <resource>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Single<A> {
    pub data: Resource<A>,
}

/// `{data: [<resource>], meta, links}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List<A> {
    pub data: Vec<Resource<A>>,
    #[serde(default)]
    pub meta: Meta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<PageLinks>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: Option<u64>,
    pub count: Option<u64>,
    pub per_page: Option<u64>,
    pub current_page: Option<u64>,
    pub total_pages: Option<u64>,
}

/// Navigation links of a paged list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(rename = "self")]
    pub current: Option<String>,
    pub first: Option<String>,
    pub next: Option<String>,
    pub prev: Option<String>,
    pub last: Option<String>,
}
