//! Convenient re-exports for working with the Firefly III catalog.
//!
//! This prelude provides the registry and the typed models callers decode
//! response bodies into.
//!
//! ## Examples
//!
//! ```
//! use firefly_definitions::prelude::*;
//!
//! let route = RouteId::ListAccount.route();
//! assert_eq!(route.resource, "accounts");
//! assert_eq!(AccountTypeFilter::Asset.to_string(), "asset");
//! ```

// Registry
pub use crate::catalog::{RouteId, catalog, find, resource_routes};

// Shared envelopes
pub use crate::types::{ErrorResponse, List, Meta, PageLinks, Pagination, Resource, Single};

// Models for each resource group
pub use crate::about::{SystemInfo, SystemInfoData, User};
pub use crate::accounts::{Account, AccountTypeFilter, ShortAccountType};
pub use crate::autocomplete::{AutocompleteAccount, AutocompleteTransaction};
pub use crate::transactions::{
    Transaction, TransactionSplit, TransactionSplitStore, TransactionStore, TransactionType,
};
