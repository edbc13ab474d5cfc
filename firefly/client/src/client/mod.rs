//! HTTP client for the Firefly III API.
//!
//! [`FireflyClient`] builds requests from catalog routes, dispatches them and
//! decodes the responses. Resource groups (`client.accounts()`, ...) offer
//! one method per route.

mod executor;
mod prepare;
mod resources;

pub use executor::{FireflyClient, FireflyClientBuilder};
pub use prepare::{PreparedRequest, TRACE_ID};
pub use resources::{
    About, Accounts, Attachments, Autocomplete, Bills, Budgets, Categories, Configuration,
    Currencies, Data, Links, PiggyBanks, Preferences, Recurrences, RuleGroups, Rules, Search,
    Summary, Tags, Transactions, Users, Webhooks,
};
