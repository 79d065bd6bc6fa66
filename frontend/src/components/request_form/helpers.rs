//! Browser-side helpers for the request form.
//!
//! - **Submission**: encoding a `VideoRequest` as `FormData` and performing
//!   the single POST, reporting the result as an `EndpointResponse` or a
//!   `TransportFailure` for `FormState::complete`.
//! - **Error mapping**: only a failed `send()` can mean the endpoint is
//!   unreachable. A rejected `fetch` surfaces there as
//!   `gloo_net::Error::JsError`, the explicit network-failure signal. Errors
//!   raised while building the request (a malformed URL, for instance) keep
//!   their text.
//! - **User feedback**: toasts styled by the `toast` classes in `style.css`.

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use common::form::{EndpointResponse, TransportFailure};
use common::model::request::VideoRequest;

use super::messages::ConfigFailure;

/// How long a toast stays on screen.
const TOAST_MILLIS: u32 = 4000;

/// Encodes the request fields as multipart form data.
fn build_form_data(request: &VideoRequest) -> Result<FormData, JsValue> {
    let form_data = FormData::new()?;
    for (name, value) in request.fields() {
        form_data.append_with_str(name, &value)?;
    }
    Ok(form_data)
}

/// Failure while preparing the request; nothing was sent.
fn request_failure(err: gloo_net::Error) -> TransportFailure {
    let text = match err {
        gloo_net::Error::JsError(js) => js.message,
        other => other.to_string(),
    };
    if text.is_empty() {
        TransportFailure::Unknown
    } else {
        TransportFailure::Other(text)
    }
}

/// Failure of `send()` itself.
fn send_failure(err: gloo_net::Error) -> TransportFailure {
    match err {
        gloo_net::Error::JsError(js) => TransportFailure::Network(js.message),
        other => request_failure(other),
    }
}

/// POSTs `request` to `url` as `multipart/form-data`.
///
/// The browser sets the multipart boundary itself when the body is a
/// `FormData`, so no content type is set here. The body is only read for
/// non-2xx responses.
pub async fn send_request(
    url: &str,
    request: &VideoRequest,
) -> Result<EndpointResponse, TransportFailure> {
    let form_data = build_form_data(request).map_err(|err| {
        err.as_string()
            .map(TransportFailure::Other)
            .unwrap_or(TransportFailure::Unknown)
    })?;

    let response = Request::post(url)
        .body(form_data)
        .map_err(request_failure)?
        .send()
        .await
        .map_err(send_failure)?;

    let status = response.status();
    let status_text = response.status_text();
    let body = if response.ok() {
        String::new()
    } else {
        response.text().await.unwrap_or_default()
    };

    Ok(EndpointResponse {
        status,
        status_text,
        body,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Warning,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Warning => "toast toast-warning",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

/// Logs a configuration failure to the console and tells the user. A backend
/// that answered with an error is a warning; one that could not be reached is
/// an error.
pub fn report_config_failure(failure: &ConfigFailure) {
    let (reason, level) = match failure {
        ConfigFailure::Unavailable(reason) => (reason, ToastLevel::Warning),
        ConfigFailure::Unreachable(reason) => (reason, ToastLevel::Error),
    };
    gloo_console::error!(format!("Failed to load client config: {}", reason));
    show_toast("Gagal memuat konfigurasi. Permintaan belum dapat dikirim.", level);
}

/// Appends a `div.toast` to the body and removes it after `TOAST_MILLIS`.
pub fn show_toast(message: &str, level: ToastLevel) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_class_name(level.class());
    toast.set_attribute("role", "status").ok();
    toast.set_text_content(Some(message));

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            toast.remove();
        });
    }
}
