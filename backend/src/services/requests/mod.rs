//! # Request Relay Service Module
//!
//! Optional server-side path for submissions, for webhooks the browser cannot
//! reach directly (for instance because they do not send CORS headers).
//!
//! - `POST /api/requests`: accepts the same `multipart/form-data` fields as
//!   the webhook (`Produk`, `description`, `videoCount`), validates them with
//!   the form rules from `common` and forwards them to the configured
//!   webhook. The upstream status and body are mirrored back so the frontend
//!   classifies the outcome exactly as if it had called the webhook itself.

use actix_web::web::{post, scope};
use actix_web::Scope;

mod error;
mod relay;

pub use error::RelayError;

/// Path the frontend submits to in relay mode.
pub const API_PATH: &str = "/api/requests";

/// Configures and returns the Actix scope for the relay route.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(relay::process))
}
