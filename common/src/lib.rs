//! Types shared by the browser frontend and the actix backend.
//!
//! - `model`: wire models exchanged over HTTP (the video request, the runtime
//!   client configuration and the JSON error body).
//! - `error`: the user-facing submission errors, each carrying a title and a
//!   message in Indonesian.
//! - `form`: the request form controller. It owns the field state, validates
//!   input, drives the idle/loading/success/error state machine and maps the
//!   state to a view model. It has no browser dependency so it is tested on
//!   the host.

pub mod error;
pub mod form;
pub mod model;
