use serde::{Deserialize, Serialize};

use crate::error::SubmissionError;

/// Multipart field carrying the product image link. The webhook expects this
/// exact (Indonesian) name.
pub const FIELD_PRODUCT: &str = "Produk";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_VIDEO_COUNT: &str = "videoCount";

pub const MIN_VIDEO_COUNT: i64 = 1;
pub const MAX_VIDEO_COUNT: i64 = 20;

/// A product-video generation request, as sent to the webhook.
///
/// Built by the form controller on submit and by the backend relay when it
/// decodes an incoming multipart body. Both sides run the same `validate`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoRequest {
    pub product_image_link: String,
    pub description: String,
    pub video_count: i64,
}

impl VideoRequest {
    /// Builds a request from raw multipart text fields.
    ///
    /// Runs the same checks, in the same order, as `validate`: missing or
    /// empty fields are `IncompleteInput` first. Only then is the count parsed
    /// strictly, and a value that is not an integer is `InvalidInput`.
    pub fn from_fields(
        product_image_link: Option<String>,
        description: Option<String>,
        video_count: Option<String>,
    ) -> Result<Self, SubmissionError> {
        let product_image_link = product_image_link.unwrap_or_default();
        let description = description.unwrap_or_default();
        let parsed_count = video_count
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(str::parse::<i64>);

        if product_image_link.is_empty()
            || description.is_empty()
            || matches!(parsed_count, None | Some(Ok(0)))
        {
            return Err(SubmissionError::IncompleteInput);
        }

        let video_count = match parsed_count {
            Some(Ok(count)) => count,
            _ => return Err(SubmissionError::InvalidInput),
        };

        let request = Self {
            product_image_link,
            description,
            video_count,
        };
        request.validate()?;
        Ok(request)
    }

    /// Checks, in order, that every field is filled and that the count lies
    /// within `MIN_VIDEO_COUNT..=MAX_VIDEO_COUNT`.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        if self.product_image_link.is_empty() || self.description.is_empty() || self.video_count == 0
        {
            return Err(SubmissionError::IncompleteInput);
        }
        if !(MIN_VIDEO_COUNT..=MAX_VIDEO_COUNT).contains(&self.video_count) {
            return Err(SubmissionError::InvalidInput);
        }
        Ok(())
    }

    /// The multipart fields in wire order. The count is the only value that is
    /// transformed (stringified).
    pub fn fields(&self) -> [(&'static str, String); 3] {
        [
            (FIELD_PRODUCT, self.product_image_link.clone()),
            (FIELD_DESCRIPTION, self.description.clone()),
            (FIELD_VIDEO_COUNT, self.video_count.to_string()),
        ]
    }
}

/// Parses the text of the video-count input the way a browser `parseInt`
/// does: leading whitespace is skipped, an optional sign and the leading run
/// of digits are taken, the rest is ignored. Unparseable input and zero both
/// fall back to `1`.
pub fn parse_video_count(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    match (seen_digit, value) {
        (false, _) | (true, 0) => MIN_VIDEO_COUNT,
        (true, v) if negative => -v,
        (true, v) => v,
    }
}
