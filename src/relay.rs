//! FormSubmit relay client: payload composition and the one outbound
//! HTTP call in the system.
//!
//! # Error Handling & Edge Cases
//!
//! The relay is a hosted black box; we only look at the response status
//! line. Known edge cases and limitations:
//!
//! - **Non-2xx responses**: reported as [`RelayError::Status`] with the
//!   numeric code; the response body is not inspected.
//! - **Transport failures** (DNS, TLS, connection reset): reported as
//!   [`RelayError::Transport`] wrapping the reqwest error.
//! - **No timeout**: the client relies on reqwest's transport defaults;
//!   a hung request keeps the form in its submitting state until the
//!   transport gives up.
//! - **No retries**: a failed attempt is surfaced once; the user may
//!   resubmit manually.
//!
//! The UI layer never panics on relay errors — it shows a generic banner
//! and logs the detail.

use serde::Serialize;
use thiserror::Error;

/// Fixed AJAX endpoint for the destination mailbox.
pub const RELAY_ENDPOINT: &str = "https://formsubmit.co/ajax/contact@example.com";

/// Subject line attached to every relayed message.
pub const RELAY_SUBJECT: &str = "Postbox - contact form submission";

/// Stands in for blank optional fields in the relayed message.
pub const BLANK_PLACEHOLDER: &str = "Not provided";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay returned HTTP {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// JSON body sent to the relay. The `message` key carries the composed
/// multi-line summary rather than the raw message field; the relay
/// forwards that key verbatim as the email body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
    /// Always false: the provider's own captcha challenge is disabled.
    #[serde(rename = "_captcha")]
    pub captcha: bool,
}

impl SubmitPayload {
    /// Compose the outbound payload from raw field values. Blank name
    /// and message are replaced by [`BLANK_PLACEHOLDER`]; the email is
    /// passed through as entered.
    pub fn compose(fields: &crate::form::FormFields) -> Self {
        let name = if fields.name.is_empty() {
            BLANK_PLACEHOLDER.to_string()
        } else {
            fields.name.clone()
        };
        let message_field = if fields.message.is_empty() {
            BLANK_PLACEHOLDER
        } else {
            fields.message.as_str()
        };
        let body = format!(
            "Name: {}\nEmail: {}\nMessage: {}",
            name, fields.email, message_field
        );

        Self {
            name,
            email: fields.email.clone(),
            message: body,
            subject: RELAY_SUBJECT.to_string(),
            captcha: false,
        }
    }
}

/// Thin blocking HTTP client around the relay endpoint. Cheap to clone
/// so a submission can run on a worker thread.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new() -> Self {
        Self::with_endpoint(RELAY_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Send one submission. Success is defined purely by the HTTP status
    /// class; the response body is ignored.
    pub fn send(&self, payload: &SubmitPayload) -> Result<(), RelayError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(payload)
            .send()?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Status(status.as_u16()))
        }
    }
}

impl Default for RelayClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormFields;

    #[test]
    fn compose_fills_blank_fields_with_placeholder() {
        let fields = FormFields {
            name: String::new(),
            email: "user@example.com".into(),
            message: String::new(),
        };
        let payload = SubmitPayload::compose(&fields);

        assert_eq!(payload.name, BLANK_PLACEHOLDER);
        assert_eq!(payload.email, "user@example.com");
        assert!(payload.message.contains("user@example.com"));
        assert!(payload.message.contains(BLANK_PLACEHOLDER));
    }

    #[test]
    fn compose_builds_a_labeled_multiline_body() {
        let fields = FormFields {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            message: "Hello there".into(),
        };
        let payload = SubmitPayload::compose(&fields);

        assert_eq!(
            payload.message,
            "Name: Ann\nEmail: ann@example.com\nMessage: Hello there"
        );
        assert_eq!(payload.name, "Ann");
        assert_eq!(payload.subject, RELAY_SUBJECT);
        assert!(!payload.captcha);
    }

    #[test]
    fn payload_serializes_with_provider_keys() {
        let fields = FormFields {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            message: "hi".into(),
        };
        let json = serde_json::to_value(SubmitPayload::compose(&fields)).unwrap();

        assert_eq!(json["_subject"], RELAY_SUBJECT);
        assert_eq!(json["_captcha"], false);
        assert_eq!(json["email"], "ann@example.com");
        assert!(json.get("subject").is_none());
        assert!(json.get("captcha").is_none());
    }

    #[test]
    fn status_error_reports_the_code() {
        let err = RelayError::Status(503);
        assert_eq!(err.to_string(), "relay returned HTTP 503");
    }
}
