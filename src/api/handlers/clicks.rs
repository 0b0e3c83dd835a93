//! Handlers for click record endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::{ClickResponse, CreateClickRequest, UpsertClickRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Records a new click.
///
/// # Endpoint
///
/// `POST /clicks`
///
/// A fresh public identifier is generated for the record; the response
/// carries it for use in later funnel-stage events and postbacks.
///
/// # Errors
///
/// Returns 400 if campaign or traffic source is missing, 422 if either
/// reference is unresolvable.
pub async fn create_click_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateClickRequest>,
) -> Result<(StatusCode, Json<ClickResponse>), AppError> {
    payload.validate()?;

    let click = state.click_service.create(payload.into_creation()).await?;
    Ok((StatusCode::CREATED, Json(click.into())))
}

/// Fetches a click by internal id.
///
/// # Endpoint
///
/// `GET /clicks/{id}`
pub async fn get_click_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ClickResponse>, AppError> {
    let click = state.click_service.get_by_id(id).await?;
    Ok(Json(click.into()))
}

/// Fetches a click by its public identifier.
///
/// # Endpoint
///
/// `GET /clicks/public/{public_id}`
pub async fn get_click_by_public_id_handler(
    State(state): State<AppState>,
    Path(public_id): Path<String>,
) -> Result<Json<ClickResponse>, AppError> {
    let click = state.click_service.get_by_public_id(&public_id).await?;
    Ok(Json(click.into()))
}

/// Creates-or-updates a click at a known id.
///
/// # Endpoint
///
/// `PUT /clicks/{id}`
///
/// Used by funnel-stage events (click, conversion) that re-assert the full
/// mandatory state and merge optional attributes. Safe to re-deliver.
pub async fn upsert_click_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpsertClickRequest>,
) -> Result<Json<ClickResponse>, AppError> {
    payload.validate()?;

    let click = state
        .click_service
        .upsert_by_id(id, payload.into_click(id))
        .await?;
    Ok(Json(click.into()))
}
