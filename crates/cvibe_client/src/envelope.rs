//! Response envelope decoding
//!
//! Every backend response is `{ success, data?, error? }` where `error` may
//! be a plain string or a structured `{code, message}` object. Both shapes
//! are accepted here and flattened to one message; the union never leaves
//! this module.

use serde::de::DeserializeOwned;
use serde::Deserialize;

const FALLBACK_ERROR: &str = "Request failed";

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ErrorBody>,
    /// Some error responses carry a bare top-level `message` instead.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ErrorBody {
    Structured {
        #[serde(default)]
        code: Option<String>,
        message: String,
    },
    Message(String),
}

impl ErrorBody {
    fn into_message(self) -> String {
        match self {
            ErrorBody::Message(message) => message,
            ErrorBody::Structured { message, .. } => message,
        }
    }
}

impl<T> Envelope<T> {
    /// Error message for a failed envelope: `error` wins over `message`,
    /// and the result is never empty.
    pub(crate) fn error_message(self) -> String {
        let message = self
            .error
            .map(ErrorBody::into_message)
            .or(self.message)
            .unwrap_or_default();
        if message.trim().is_empty() {
            FALLBACK_ERROR.to_string()
        } else {
            message
        }
    }
}

/// Extract an error message from an arbitrary response body, used for
/// non-2xx responses whose envelope shape is not guaranteed.
pub(crate) fn error_message_from_value(value: &serde_json::Value) -> Option<String> {
    let message = match value.get("error") {
        Some(serde_json::Value::String(message)) => Some(message.clone()),
        Some(serde_json::Value::Object(object)) => object
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string),
        _ => None,
    };
    message
        .or_else(|| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .filter(|message| !message.trim().is_empty())
}

pub(crate) fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<Envelope<T>, String> {
    serde_json::from_value(value).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_string_error() {
        let envelope: Envelope<()> =
            serde_json::from_str(r#"{"success":false,"error":"nope"}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.error_message(), "nope");
    }

    #[test]
    fn structured_error() {
        let envelope: Envelope<()> =
            serde_json::from_str(r#"{"success":false,"error":{"code":"AUTH_401","message":"bad token"}}"#)
                .unwrap();
        assert_eq!(envelope.error_message(), "bad token");
    }

    #[test]
    fn top_level_message_fallback() {
        let envelope: Envelope<()> =
            serde_json::from_str(r#"{"success":false,"message":"validation failed"}"#).unwrap();
        assert_eq!(envelope.error_message(), "validation failed");
    }

    #[test]
    fn empty_error_falls_back_to_default() {
        let envelope: Envelope<()> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(envelope.error_message(), FALLBACK_ERROR);

        let envelope: Envelope<()> =
            serde_json::from_str(r#"{"success":false,"error":"  "}"#).unwrap();
        assert_eq!(envelope.error_message(), FALLBACK_ERROR);
    }

    #[test]
    fn error_message_from_raw_body() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"error":{"code":"X","message":"structured"}}"#).unwrap();
        assert_eq!(error_message_from_value(&value).as_deref(), Some("structured"));

        let value: serde_json::Value = serde_json::from_str(r#"{"error":"plain"}"#).unwrap();
        assert_eq!(error_message_from_value(&value).as_deref(), Some("plain"));

        let value: serde_json::Value = serde_json::from_str(r#"{"message":"bare"}"#).unwrap();
        assert_eq!(error_message_from_value(&value).as_deref(), Some("bare"));

        let value: serde_json::Value = serde_json::from_str(r#"{"ok":1}"#).unwrap();
        assert!(error_message_from_value(&value).is_none());
    }
}
