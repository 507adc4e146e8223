/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /auth/register` - Account creation
 * - `POST /auth/login` - Password login, sets the session cookie
 * - `POST /auth/logout` - Expires the session cookie
 *
 * ## Profile (session required)
 * - `GET /profile` - Own profile, including email
 * - `PUT /profile` - Multipart accent colour / avatar update
 *
 * ## Links (session required, except the click counter)
 * - `GET /links`, `POST /links`
 * - `PUT /links/{id}`, `DELETE /links/{id}`
 * - `POST /links/reorder`
 * - `POST /links/{id}/click` - Public
 *
 * ## Public
 * - `GET /users/{username}` - Profile and links, no email
 * - `GET /health` - Liveness and database reachability
 */

use axum::{
    extract::{DefaultBodyLimit, State},
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde_json::{json, Value};

use crate::backend::auth::handlers::{login, logout, register};
use crate::backend::links::handlers::{
    create_link, delete_link, list_links, record_click, reorder_links, update_link,
};
use crate::backend::profile::avatar::MAX_AVATAR_BYTES;
use crate::backend::profile::handlers::{get_profile, put_profile};
use crate::backend::public::handlers::get_public_profile;
use crate::backend::server::state::AppState;

/// Multipart framing allowance on top of the avatar itself
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Configure API routes
///
/// Authentication is enforced per handler by the `AuthUser` extractor, so
/// unauthenticated requests are rejected before any handler body runs.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        // Profile endpoints
        .route(
            "/profile",
            get(get_profile)
                .put(put_profile)
                .layer(DefaultBodyLimit::max(MAX_AVATAR_BYTES + MULTIPART_OVERHEAD)),
        )
        // Link endpoints
        .route("/links", get(list_links).post(create_link))
        .route("/links/reorder", post(reorder_links))
        .route("/links/{id}", put(update_link).delete(delete_link))
        .route("/links/{id}/click", post(record_click))
        // Public endpoints
        .route("/users/{username}", get(get_public_profile))
        .route("/health", get(health))
}

/// Health check with database reachability
async fn health(State(state): State<AppState>) -> Json<Value> {
    let database = match &state.db_pool {
        Some(pool) => match sqlx::query("SELECT 1").execute(pool).await {
            Ok(_) => "ok",
            Err(e) => {
                tracing::error!("Health check query failed: {:?}", e);
                "unreachable"
            }
        },
        None => "not_configured",
    };

    Json(json!({ "status": "ok", "database": database }))
}
