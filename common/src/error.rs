//! User-facing submission errors.
//!
//! Every failure of a submission attempt ends up as one of these variants and
//! is rendered as a title plus a message. None of them is fatal: the user can
//! always resubmit or reset the form.

use thiserror::Error;

pub const INCOMPLETE_INPUT_TITLE: &str = "Input Tidak Lengkap";
pub const INCOMPLETE_INPUT_MESSAGE: &str = "Harap isi semua bidang yang ditandai bintang (*).";

pub const INVALID_INPUT_TITLE: &str = "Input Tidak Valid";
pub const INVALID_INPUT_MESSAGE: &str = "Jumlah video harus antara 1 dan 20.";

pub const SUBMISSION_FAILED_TITLE: &str = "Gagal Mengirim Permintaan";
pub const CONNECTIVITY_MESSAGE: &str = "Gagal terhubung ke server. Pastikan Anda terhubung ke internet dan server webhook dapat diakses.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Terjadi kesalahan yang tidak diketahui. Periksa koneksi internet Anda atau coba lagi nanti.";

pub const NOT_CONFIGURED_TITLE: &str = "Konfigurasi Tidak Tersedia";
pub const NOT_CONFIGURED_MESSAGE: &str = "Alamat webhook belum dikonfigurasi. Muat ulang halaman atau hubungi administrator.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// One or more required fields are empty (or the count is zero).
    #[error("{}", INCOMPLETE_INPUT_MESSAGE)]
    IncompleteInput,

    /// The video count is outside `1..=20`.
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput,

    /// The endpoint answered with a non-2xx status.
    #[error("{message}")]
    EndpointError { status: u16, message: String },

    /// The endpoint could not be reached at all.
    #[error("{}", CONNECTIVITY_MESSAGE)]
    ConnectivityError,

    /// Anything else. `detail` holds the underlying error text when there is
    /// one; otherwise the generic message is shown.
    #[error("{}", unknown_message(.detail))]
    UnknownError { detail: Option<String> },

    /// The frontend has no submit URL because the runtime config never loaded.
    #[error("{}", NOT_CONFIGURED_MESSAGE)]
    NotConfigured,
}

fn unknown_message(detail: &Option<String>) -> &str {
    detail.as_deref().unwrap_or(UNKNOWN_ERROR_MESSAGE)
}

impl SubmissionError {
    pub fn title(&self) -> &'static str {
        match self {
            SubmissionError::IncompleteInput => INCOMPLETE_INPUT_TITLE,
            SubmissionError::InvalidInput => INVALID_INPUT_TITLE,
            SubmissionError::NotConfigured => NOT_CONFIGURED_TITLE,
            SubmissionError::EndpointError { .. }
            | SubmissionError::ConnectivityError
            | SubmissionError::UnknownError { .. } => SUBMISSION_FAILED_TITLE,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether the error was raised before any network call was made.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SubmissionError::IncompleteInput | SubmissionError::InvalidInput
        )
    }
}
