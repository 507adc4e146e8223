/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (auth, profile, links, public profile, health)
 * 2. Page routes (gated HTML entry points)
 * 3. Uploaded avatars under `/uploads`
 * 4. Fallback handler (JSON 404)
 */

use axum::{http::Uri, Router};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::error::ApiError;
use crate::backend::profile::avatar::PUBLIC_PREFIX;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::page_routes::configure_page_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// Every request runs inside a `TraceLayer` span.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());
    let router = configure_page_routes(router, &app_state);

    // Serve uploaded avatars
    let router = router.nest_service(PUBLIC_PREFIX, ServeDir::new(app_state.avatars.dir()));

    let router = router.fallback(not_found);

    router
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!("No route for {}", uri.path());
    ApiError::NotFound("Route")
}
