//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, service wiring and the Axum
//! server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;

use crate::api::routes::app_router;
use crate::application::services::{ClickService, PostbackService};
use crate::config::Config;
use crate::infrastructure::persistence::PgClickRepository;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Migrations
/// - Click and postback services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let click_repository = Arc::new(PgClickRepository::new(Arc::new(pool)));
    let click_service = Arc::new(ClickService::new(click_repository));
    let postback_service = Arc::new(PostbackService::new(click_service.clone()));

    let state = AppState::new(click_service, postback_service);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
