//! API route configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    create_click_handler, get_click_by_public_id_handler, get_click_handler, health_handler,
    postback_preview_by_public_id_handler, postback_preview_handler, upsert_click_handler,
};
use crate::state::AppState;

/// Builds the application router.
///
/// # Endpoints
///
/// - `GET  /health`                      - Liveness probe
/// - `POST /clicks`                      - Record a new click
/// - `GET  /clicks/{id}`                 - Fetch by internal id
/// - `PUT  /clicks/{id}`                 - Create-or-update at a known id
/// - `GET  /clicks/public/{public_id}`   - Fetch by public identifier
/// - `POST /clicks/{id}/postback-url`    - Render a postback URL template
/// - `POST /clicks/public/{public_id}/postback-url` - Same, by public identifier
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/clicks", post(create_click_handler))
        .route(
            "/clicks/{id}",
            get(get_click_handler).put(upsert_click_handler),
        )
        .route(
            "/clicks/public/{public_id}",
            get(get_click_by_public_id_handler),
        )
        .route("/clicks/{id}/postback-url", post(postback_preview_handler))
        .route(
            "/clicks/public/{public_id}/postback-url",
            post(postback_preview_by_public_id_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
