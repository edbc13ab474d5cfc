//! Response classification and the decoded envelope.
//!
//! Every dispatch yields an [`Envelope`]: the status, headers and a body
//! decoded according to its [`ContentKind`].

mod content;
mod envelope;

pub use content::ContentKind;
pub use envelope::{Envelope, ResponseBody};
