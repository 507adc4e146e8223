/**
 * Page Routes
 *
 * The HTML entry points are static files from `public/`. They sit behind
 * the page gate, which redirects based on the session cookie before the
 * file is served:
 *
 * - `/dashboard` (and anything below it) without a session → `/login`
 * - `/login` or `/register` with a session → `/dashboard`
 */

use axum::{middleware::from_fn_with_state, routing::get_service, Router};
use tower_http::services::ServeFile;

use crate::backend::middleware::auth::page_gate;
use crate::backend::server::state::AppState;

/// Directory holding the HTML entry points
pub const PAGES_DIR: &str = "public";

/// Configure gated page routes
pub fn configure_page_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let dashboard = format!("{}/dashboard.html", PAGES_DIR);
    let login = format!("{}/login.html", PAGES_DIR);
    let register = format!("{}/register.html", PAGES_DIR);

    let pages = Router::new()
        .route("/dashboard", get_service(ServeFile::new(&dashboard)))
        .route("/dashboard/{*rest}", get_service(ServeFile::new(&dashboard)))
        .route("/login", get_service(ServeFile::new(login)))
        .route("/register", get_service(ServeFile::new(register)))
        .route_layer(from_fn_with_state(app_state.sessions.clone(), page_gate));

    router.merge(pages)
}
