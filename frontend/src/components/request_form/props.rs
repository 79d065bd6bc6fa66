//! Defines the properties for the `RequestFormComponent`.

use yew::prelude::*;

/// Properties for the `RequestFormComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct RequestFormProps {
    /// Path of the backend endpoint publishing the runtime configuration.
    ///
    /// Fetched once, on the first render. Overridable so the form can be
    /// mounted under a different prefix.
    #[prop_or(AttrValue::Static("/api/config"))]
    pub config_path: AttrValue,
}
