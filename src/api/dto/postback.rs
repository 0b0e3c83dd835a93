//! DTOs for postback URL preview.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to render a postback URL template against a stored click.
#[derive(Debug, Deserialize, Validate)]
pub struct PostbackPreviewRequest {
    /// Advertiser-supplied template with `{name}` macro placeholders.
    #[validate(length(min = 1, message = "template must not be empty"))]
    pub template: String,
}

/// The rendered postback URL.
#[derive(Debug, Serialize)]
pub struct PostbackPreviewResponse {
    pub url: String,
}
