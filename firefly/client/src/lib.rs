//! Typed dispatcher for the Firefly III REST API.
//!
//! Routes come from `firefly-definitions`; this crate turns a [`RouteId`]
//! plus [`CallParams`] into exactly one HTTP request and returns an
//! [`Envelope`] whose body is decoded according to its media type.
//!
//! ## Features
//!
//! - **Pure request building**: [`FireflyClient::prepare`] reports missing
//!   placeholders and required query parameters before any network traffic
//! - **Media-type classification**: JSON bodies are parsed, `text/*` is kept
//!   as text, everything else passes through as bytes
//! - **Contract validation**: structured bodies are checked against the shape
//!   declared for the returned status, defaults filled in
//! - **Cancellation**: [`FireflyClient::dispatch_until`] races a request
//!   against a caller-supplied future
//! - **Layered error handling**: see [`error`]
//!
//! ## Example
//!
//! ```no_run
//! use firefly_client::{CallParams, FireflyClient};
//! use firefly_definitions::{List, accounts::Account};
//!
//! # async fn run() -> Result<(), firefly_client::ApiError> {
//! let client = FireflyClient::new("https://demo.firefly-iii.org/api", "token")?;
//! let envelope = client
//!     .accounts()
//!     .list_account(CallParams::new().query("type", "asset"))
//!     .await?
//!     .error_for_status()?;
//!
//! let accounts: List<Account> = envelope.json()?;
//! for account in accounts.data {
//!     println!("{} {}", account.id, account.attributes.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod call;
pub mod client;
pub mod error;
pub mod path;
pub mod query;
pub mod response;

// Re-exports for convenience
pub use call::{CallParams, QueryValue, RequestBody};
pub use client::{FireflyClient, FireflyClientBuilder, PreparedRequest, TRACE_ID};
pub use error::{ApiError, ClientError, ConfigError, ServerError, UsageError, ValidationError};
pub use firefly_definitions::RouteId;
pub use path::{MissingPlaceholder, PathTemplate};
pub use query::ArrayEncoding;
pub use response::{ContentKind, Envelope, ResponseBody};
