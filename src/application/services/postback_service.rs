//! Postback URL construction service.

use std::sync::Arc;

use crate::application::services::ClickService;
use crate::domain::postback::{macro_map, substitute};
use crate::error::AppError;

/// Builds outbound postback URLs for stored clicks.
///
/// Loads the current record, projects it to the macro table, and rewrites the
/// advertiser-supplied template. Delivery of the resulting URL is an external
/// collaborator's concern.
pub struct PostbackService {
    clicks: Arc<ClickService>,
}

impl PostbackService {
    /// Creates a new postback service.
    pub fn new(clicks: Arc<ClickService>) -> Self {
        Self { clicks }
    }

    /// Builds the postback URL for a click by internal id.
    ///
    /// Substitution itself cannot fail: unresolved placeholders stay
    /// verbatim and malformed token data was already degraded on read.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the click does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn build_postback_url(&self, click_id: i64, template: &str) -> Result<String, AppError> {
        let click = self.clicks.get_by_id(click_id).await?;
        let macros = macro_map(&click);
        Ok(substitute(template, &macros, &click.tokens))
    }

    /// Builds the postback URL for a click by public identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the click does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn build_postback_url_by_public_id(
        &self,
        public_id: &str,
        template: &str,
    ) -> Result<String, AppError> {
        let click = self.clicks.get_by_public_id(public_id).await?;
        let macros = macro_map(&click);
        Ok(substitute(template, &macros, &click.tokens))
    }
}
