use serde::{Deserialize, Serialize};

/// Runtime configuration published by the backend at `GET /api/config`.
///
/// The frontend fetches it once on first render. `submit_url` is either the
/// webhook itself or the backend relay path, depending on `relay`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub submit_url: String,
    pub relay: bool,
}
