use actix_multipart::MultipartError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::error::{SubmissionError, NOT_CONFIGURED_MESSAGE};
use common::model::error_body::ErrorBody;
use thiserror::Error;

/// Failures of the relay endpoint. Each one is answered with a JSON
/// `{"message": ...}` body, the same shape the webhook uses, so the frontend
/// handles relay and direct submissions alike.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Relay tidak diaktifkan.")]
    Disabled,

    #[error("{}", NOT_CONFIGURED_MESSAGE)]
    NotConfigured,

    #[error(transparent)]
    Rejected(#[from] SubmissionError),

    #[error("Data formulir tidak valid: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Data formulir tidak valid: bidang {0} bukan teks UTF-8.")]
    NotUtf8(&'static str),

    #[error("Data formulir tidak valid: bidang {0} melebihi 64 KiB.")]
    FieldTooLarge(&'static str),

    #[error("Webhook tidak merespons dalam batas waktu.")]
    Timeout,

    #[error("Gagal menghubungi webhook: {0}")]
    Upstream(reqwest::Error),
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RelayError::Timeout
        } else {
            RelayError::Upstream(err)
        }
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Disabled => StatusCode::NOT_FOUND,
            RelayError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            RelayError::Rejected(_)
            | RelayError::Multipart(_)
            | RelayError::NotUtf8(_)
            | RelayError::FieldTooLarge(_) => StatusCode::BAD_REQUEST,
            RelayError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            RelayError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.to_string()))
    }
}
