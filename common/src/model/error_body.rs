use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON body returned on failure, both by the webhook and by our backend.
///
/// The `message` field is optional because the webhook is not under our
/// control; only its presence is part of the contract.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// Reads the `message` of a failure body.
///
/// `Err` when the body is not JSON at all. `Ok(None)` when it is JSON but has
/// no non-empty string `message` (including non-object bodies such as `[]`).
pub fn message_from_body(body: &str) -> Result<Option<String>, serde_json::Error> {
    let value = serde_json::from_str::<Value>(body)?;
    Ok(value
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_owned))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_read_from_object() {
        assert_eq!(
            message_from_body(r#"{"message":"boom"}"#).unwrap(),
            Some("boom".to_string())
        );
    }

    #[test]
    fn json_without_usable_message_is_none() {
        for body in [r#"{}"#, r#"{"message":""}"#, r#"{"message":3}"#, "[]", "null"] {
            assert_eq!(message_from_body(body).unwrap(), None, "body {body}");
        }
    }

    #[test]
    fn non_json_is_an_error() {
        assert!(message_from_body("").is_err());
        assert!(message_from_body("<html>bad gateway</html>").is_err());
    }

    #[test]
    fn serialized_body_round_trips_through_reader() {
        let body = serde_json::to_string(&ErrorBody::new("Relay tidak diaktifkan.")).unwrap();
        assert_eq!(
            message_from_body(&body).unwrap().as_deref(),
            Some("Relay tidak diaktifkan.")
        );
    }
}
