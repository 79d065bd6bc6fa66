//! Component state for the request form.
//!
//! The form data and its idle/loading/success/error status live in the
//! platform-neutral `common::form::FormState`; this struct only adds what is
//! specific to running in the browser.

use common::form::FormState;

/// Main state container for the `RequestFormComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update` modules.
pub struct RequestFormComponent {
    /// Field values and submission status.
    pub form: FormState,

    /// Where submissions are POSTed. `None` until `/api/config` has answered.
    pub submit_url: Option<String>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl RequestFormComponent {
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            submit_url: None,
            loaded: false,
        }
    }
}
