//! Handler for postback URL preview.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::{PostbackPreviewRequest, PostbackPreviewResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Renders a postback URL template against a stored click.
///
/// # Endpoint
///
/// `POST /clicks/{id}/postback-url`
///
/// Every recognized `{name}` placeholder is substituted; unrecognized ones
/// are left verbatim, so a template that mixes macros with the advertiser's
/// own query syntax still renders.
///
/// # Errors
///
/// Returns 404 if the click does not exist.
pub async fn postback_preview_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<PostbackPreviewRequest>,
) -> Result<Json<PostbackPreviewResponse>, AppError> {
    payload.validate()?;

    let url = state
        .postback_service
        .build_postback_url(id, &payload.template)
        .await?;
    Ok(Json(PostbackPreviewResponse { url }))
}

/// Renders a postback URL template against a click looked up by its public
/// identifier, the form external networks hold.
///
/// # Endpoint
///
/// `POST /clicks/public/{public_id}/postback-url`
///
/// # Errors
///
/// Returns 404 if the click does not exist.
pub async fn postback_preview_by_public_id_handler(
    State(state): State<AppState>,
    Path(public_id): Path<String>,
    Json(payload): Json<PostbackPreviewRequest>,
) -> Result<Json<PostbackPreviewResponse>, AppError> {
    payload.validate()?;

    let url = state
        .postback_service
        .build_postback_url_by_public_id(&public_id, &payload.template)
        .await?;
    Ok(Json(PostbackPreviewResponse { url }))
}
