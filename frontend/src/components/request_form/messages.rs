use common::form::{EndpointResponse, TransportFailure};
use common::model::config::ClientConfig;

pub enum Msg {
    SetProductImageLink(String),
    SetDescription(String),
    SetVideoCount(String),
    Submit,
    Completed(Result<EndpointResponse, TransportFailure>),
    Reset,
    ConfigLoaded(ClientConfig),
    ConfigFailed(ConfigFailure),
}

/// Why `/api/config` gave no usable configuration.
pub enum ConfigFailure {
    /// The backend answered, but with an error (e.g. no webhook configured).
    Unavailable(String),
    /// The backend could not be reached or its answer could not be decoded.
    Unreachable(String),
}
