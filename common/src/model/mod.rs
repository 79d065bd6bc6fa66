pub mod config;
pub mod error_body;
pub mod request;
