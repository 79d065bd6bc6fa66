//! # Client Config Service Module
//!
//! Publishes the runtime configuration the frontend needs before it can
//! submit: where to POST the request and whether that is the backend relay.
//!
//! ## Sub-modules:
//! - `get`: builds the `ClientConfig` from the startup `Settings`.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for the client configuration endpoint.
const API_PATH: &str = "/api/config";

/// Configures and returns the Actix `Scope` for the configuration route.
///
/// # Registered Routes:
///
/// *   **`GET /api/config`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns `{"submitUrl": ..., "relay": ...}`. When no
///       webhook URL is configured it answers `503` with a JSON `message`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(get::process))
}
