//! Request form controller.
//!
//! `FormState` is the single owned record behind the page. Field setters are
//! unconstrained; `submit` validates and either moves to `Error` or to
//! `Loading` and hands back the request to send; `complete` settles a
//! loading submission from the network outcome; `reset` restores defaults.
//!
//! Transitions:
//!
//! | from          | event                  | to        |
//! |---------------|------------------------|-----------|
//! | idle, error   | submit, valid input    | loading   |
//! | idle, error   | submit, invalid input  | error     |
//! | loading       | 2xx response           | success   |
//! | loading       | non-2xx / no response  | error     |
//! | any           | reset                  | idle      |
//!
//! A submit while loading is refused so at most one request is in flight.

mod outcome;
mod view;

pub use outcome::{classify, EndpointResponse, TransportFailure, UNPARSEABLE_BODY_MESSAGE};
pub use view::{Alert, FormView, Panel, SUBMIT_LABEL, SUBMIT_LABEL_LOADING};

use crate::error::SubmissionError;
use crate::model::request::{parse_video_count, VideoRequest, MIN_VIDEO_COUNT};

pub const DEFAULT_DESCRIPTION: &str =
    "Buatkan iklan motion graphic untuk produk ini dengan gaya yang ceria dan modern.";

/// Status of the form. The error payload lives inside the `Error` variant, so
/// an error is present exactly when the status is `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(SubmissionError),
}

impl FormStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FormStatus::Loading)
    }

    pub fn error(&self) -> Option<&SubmissionError> {
        match self {
            FormStatus::Error(error) => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    product_image_link: String,
    description: String,
    video_count: i64,
    status: FormStatus,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            product_image_link: String::new(),
            description: DEFAULT_DESCRIPTION.to_string(),
            video_count: MIN_VIDEO_COUNT,
            status: FormStatus::Idle,
        }
    }

    pub fn product_image_link(&self) -> &str {
        &self.product_image_link
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn video_count(&self) -> i64 {
        self.video_count
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn set_product_image_link(&mut self, value: impl Into<String>) {
        self.product_image_link = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    /// Takes the raw text of the count input; see `parse_video_count`.
    pub fn set_video_count(&mut self, value: &str) {
        self.video_count = parse_video_count(value);
    }

    pub fn to_request(&self) -> VideoRequest {
        VideoRequest {
            product_image_link: self.product_image_link.clone(),
            description: self.description.clone(),
            video_count: self.video_count,
        }
    }

    /// Starts a submission.
    ///
    /// Returns the request to send when validation passes (status becomes
    /// `Loading`). Returns `None` when no network call must be made: either
    /// validation failed (status becomes `Error`) or a request is already in
    /// flight (status unchanged).
    pub fn submit(&mut self) -> Option<VideoRequest> {
        if self.status.is_loading() {
            return None;
        }

        let request = self.to_request();
        match request.validate() {
            Ok(()) => {
                self.status = FormStatus::Loading;
                Some(request)
            }
            Err(error) => {
                self.status = FormStatus::Error(error);
                None
            }
        }
    }

    /// Settles the in-flight submission. Outcomes arriving while not loading
    /// (for instance after a reset) are dropped; the return value tells
    /// whether the state changed.
    pub fn complete(&mut self, outcome: Result<EndpointResponse, TransportFailure>) -> bool {
        if !self.status.is_loading() {
            return false;
        }
        self.status = match classify(outcome) {
            Ok(()) => FormStatus::Success,
            Err(error) => FormStatus::Error(error),
        };
        true
    }

    /// Fails the in-flight submission without a network outcome, e.g. when
    /// there is nowhere to send it.
    pub fn abort(&mut self, error: SubmissionError) -> bool {
        if !self.status.is_loading() {
            return false;
        }
        self.status = FormStatus::Error(error);
        true
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn view(&self) -> FormView<'_> {
        FormView::from_state(self)
    }
}
