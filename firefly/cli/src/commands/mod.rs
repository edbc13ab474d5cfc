//! Subcommand implementations.

pub mod about;
pub mod accounts;
pub mod suggest;
pub mod transaction;

use firefly_client::{ApiError, Envelope};

/// Best available explanation of a failed response.
fn failure_message(envelope: Envelope) -> String {
    let status = envelope.status;
    match envelope.error_for_status() {
        Err(ApiError::Server(err)) if err.body.message.is_some() => err.message().to_string(),
        _ => format!("server answered with status {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use firefly_client::{ResponseBody, RouteId};
    use serde_json::json;

    fn envelope(status: u16, body: ResponseBody) -> Envelope {
        Envelope {
            route: RouteId::StoreTransaction,
            status,
            headers: Default::default(),
            body,
            validated: false,
        }
    }

    #[test]
    fn failure_message_prefers_the_server_message() {
        let env = envelope(
            422,
            ResponseBody::Json(json!({"message": "The given data was invalid."})),
        );
        assert_eq!(failure_message(env), "The given data was invalid.");
    }

    #[test]
    fn failure_message_falls_back_to_status() {
        assert_eq!(
            failure_message(envelope(500, ResponseBody::Empty)),
            "server answered with status 500"
        );
        assert_eq!(
            failure_message(envelope(201, ResponseBody::Empty)),
            "server answered with status 201"
        );
    }
}
