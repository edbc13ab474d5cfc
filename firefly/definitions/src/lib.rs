//! Firefly III API Definitions
//!
//! This crate contains the Firefly III route catalog, written with the
//! primitives from `firefly-define`. Each resource group is organized in its
//! own module and contributes one function per route; [`RouteId`] ties them
//! into a single registry.
//!
//! ## Resource Groups
//!
//! - [`about`] - System information and the current user
//! - [`accounts`] - Asset, expense, revenue and liability accounts
//! - [`attachments`] - File attachments (binary upload and download)
//! - [`autocomplete`] - Suggestion lists for forms
//! - [`bills`] - Recurring bills and what paid them
//! - [`budgets`] - Budgets and their spending
//! - [`categories`] - Transaction categories
//! - [`configuration`] - System configuration (form-encoded updates)
//! - [`currencies`] - Currencies, addressed by code
//! - [`data`] - Export (CSV), bulk update and purge
//! - [`links`] - Link types and links between transactions
//! - [`piggy_banks`] - Piggy banks and their events
//! - [`preferences`] - User preferences
//! - [`recurrences`] - Recurring transactions
//! - [`rule_groups`] - Rule groups, testing and firing them
//! - [`rules`] - Rules with their triggers and actions
//! - [`search`] - Account and transaction search
//! - [`summary`] - Basic summary and the account overview chart
//! - [`tags`] - Tags
//! - [`transactions`] - Transactions and their splits
//! - [`users`] - User management
//! - [`webhooks`] - Webhooks, messages and delivery attempts
//!
//! ## Examples
//!
//! ```
//! use firefly_definitions::{RouteId, catalog};
//!
//! let route = RouteId::StoreTransaction.route();
//! assert_eq!(route.path, "/v1/transactions");
//! assert!(route.responses.get(422).is_some());
//! assert!(catalog().len() > 50);
//! ```

pub mod about;
pub mod accounts;
pub mod attachments;
pub mod autocomplete;
pub mod bills;
pub mod budgets;
pub mod catalog;
pub mod categories;
pub mod common;
pub mod configuration;
pub mod currencies;
pub mod data;
pub mod links;
pub mod piggy_banks;
pub mod preferences;
pub mod prelude;
pub mod recurrences;
pub mod rule_groups;
pub mod rules;
pub mod search;
pub mod summary;
pub mod tags;
pub mod transactions;
pub mod types;
pub mod users;
pub mod webhooks;

// Re-export the registry for convenience
pub use catalog::{RouteId, catalog, find, resource_routes};
pub use types::{ErrorResponse, List, Meta, PageLinks, Pagination, Resource, Single};
