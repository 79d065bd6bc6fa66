use super::{FormState, FormStatus};

pub const SUBMIT_LABEL: &str = "Kirim Permintaan Konten";
pub const SUBMIT_LABEL_LOADING: &str = "Mengirim...";

/// Title and message of the error block shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: String,
}

/// Which of the two page panels is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Form { alert: Option<Alert> },
    Success,
}

/// Everything the page needs to render one `FormState`. Recomputed after
/// every state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView<'a> {
    pub product_image_link: &'a str,
    pub description: &'a str,
    pub video_count: i64,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub panel: Panel,
}

impl<'a> FormView<'a> {
    pub fn from_state(state: &'a FormState) -> Self {
        let loading = state.status.is_loading();
        let panel = match &state.status {
            FormStatus::Success => Panel::Success,
            FormStatus::Error(error) => Panel::Form {
                alert: Some(Alert {
                    title: error.title(),
                    message: error.message(),
                }),
            },
            FormStatus::Idle | FormStatus::Loading => Panel::Form { alert: None },
        };

        Self {
            product_image_link: &state.product_image_link,
            description: &state.description,
            video_count: state.video_count,
            submit_label: if loading { SUBMIT_LABEL_LOADING } else { SUBMIT_LABEL },
            submit_disabled: loading,
            panel,
        }
    }
}
