//! Layered error types for the dispatcher.
//!
//! Every fault reaches the immediate caller; nothing is recovered inside the
//! client.
//!
//! - [`ApiError`] - Top-level error returned by every dispatcher operation
//! - [`UsageError`] - Caller faults detected before any network traffic
//! - [`ClientError`] - Transport faults and cancellation
//! - [`ValidationError`] - Responses that break the route's declared contract
//! - [`ServerError`] - Server-declared faults, raised by `error_for_status`
//! - [`ConfigError`] - Invalid client configuration

mod api_error;
mod client_error;
mod config_error;
mod server_error;
mod usage_error;
mod validation_error;

pub use api_error::ApiError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use server_error::ServerError;
pub use usage_error::UsageError;
pub use validation_error::ValidationError;
