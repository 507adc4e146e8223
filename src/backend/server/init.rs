/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load the optional database pool (and run migrations)
 * 2. Build `AppState` from the configuration
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// The function is designed to be resilient:
/// - Missing database: Server continues, data routes answer 503
/// - Migration failures: Logged but don't prevent startup
pub async fn create_app(config: ServerConfig) -> Router<()> {
    tracing::info!(environment = ?config.environment, "Initializing linkfolio backend server");

    let db_pool = load_database(&config).await;
    let app_state = AppState::new(config, db_pool);

    tracing::info!(
        upload_dir = %app_state.avatars.dir().display(),
        database = app_state.db_pool.is_some(),
        "Application state initialized"
    );

    create_router(app_state)
}
