//! Classification of the single network call made by a submission.
//!
//! The browser (or a test) performs the POST and reports back either an
//! `EndpointResponse` or a `TransportFailure`; `classify` turns that into the
//! final result of the attempt.

use crate::error::SubmissionError;
use crate::model::error_body::message_from_body;

/// Message used when a failed response carries a body that is not JSON.
pub const UNPARSEABLE_BODY_MESSAGE: &str = "Gagal mem-parsing respons error dari server.";

/// Substring of the error text a browser produces when `fetch` cannot reach
/// the server at all.
const FETCH_FAILURE_MARKER: &str = "Failed to fetch";

/// What came back from the endpoint. The body is only read for non-2xx
/// responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl EndpointResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Why the request produced no response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// The platform reported an explicit network error (the `fetch` promise
    /// rejected).
    Network(String),
    /// Some other error with a message.
    Other(String),
    /// An error without any usable description.
    Unknown,
}

pub fn classify(
    result: Result<EndpointResponse, TransportFailure>,
) -> Result<(), SubmissionError> {
    match result {
        Ok(response) if response.is_success() => Ok(()),
        Ok(response) => Err(SubmissionError::EndpointError {
            status: response.status,
            message: endpoint_error_message(&response),
        }),
        Err(TransportFailure::Network(_)) => Err(SubmissionError::ConnectivityError),
        Err(TransportFailure::Other(text)) if text.contains(FETCH_FAILURE_MARKER) => {
            Err(SubmissionError::ConnectivityError)
        }
        Err(TransportFailure::Other(text)) if !text.is_empty() => {
            Err(SubmissionError::UnknownError { detail: Some(text) })
        }
        Err(TransportFailure::Other(_)) | Err(TransportFailure::Unknown) => {
            Err(SubmissionError::UnknownError { detail: None })
        }
    }
}

/// A JSON body's non-empty `message` wins; a JSON body without one falls back
/// to the status line; a body that is not JSON at all gets the parse-failure
/// message.
fn endpoint_error_message(response: &EndpointResponse) -> String {
    match message_from_body(&response.body) {
        Ok(Some(message)) => message,
        Ok(None) => format!(
            "Server merespons dengan status {}: {}",
            response.status, response.status_text
        ),
        Err(_) => UNPARSEABLE_BODY_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, status_text: &str, body: &str) -> EndpointResponse {
        EndpointResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn any_2xx_is_success() {
        for status in [200, 201, 202, 204, 299] {
            assert_eq!(classify(Ok(response(status, "OK", "not json"))), Ok(()));
        }
    }

    #[test]
    fn json_message_is_used() {
        let result = classify(Ok(response(500, "Internal Server Error", r#"{"message":"boom"}"#)));
        assert_eq!(
            result,
            Err(SubmissionError::EndpointError {
                status: 500,
                message: "boom".into()
            })
        );
    }

    #[test]
    fn json_without_message_uses_status_line() {
        for body in [r#"{}"#, r#"{"message":""}"#, r#"{"message":3}"#, "[]"] {
            let result = classify(Ok(response(404, "Not Found", body)));
            assert_eq!(
                result.unwrap_err().message(),
                "Server merespons dengan status 404: Not Found",
                "body {body}"
            );
        }
    }

    #[test]
    fn non_json_body_uses_parse_fallback() {
        for body in ["", "<html>bad gateway</html>"] {
            let result = classify(Ok(response(502, "Bad Gateway", body)));
            assert_eq!(result.unwrap_err().message(), UNPARSEABLE_BODY_MESSAGE);
        }
    }

    #[test]
    fn network_failures_are_connectivity_errors() {
        assert_eq!(
            classify(Err(TransportFailure::Network("TypeError".into()))),
            Err(SubmissionError::ConnectivityError)
        );
        assert_eq!(
            classify(Err(TransportFailure::Other("TypeError: Failed to fetch".into()))),
            Err(SubmissionError::ConnectivityError)
        );
    }

    #[test]
    fn other_failures_keep_their_text() {
        assert_eq!(
            classify(Err(TransportFailure::Other("body already used".into()))),
            Err(SubmissionError::UnknownError {
                detail: Some("body already used".into())
            })
        );
        assert_eq!(
            classify(Err(TransportFailure::Unknown)),
            Err(SubmissionError::UnknownError { detail: None })
        );
    }
}
