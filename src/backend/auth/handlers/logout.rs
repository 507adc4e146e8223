/**
 * Logout Handler
 *
 * Sessions have no server-side state, so logging out only expires the
 * cookie. The call succeeds whether or not the presented token is valid.
 */

use axum::response::Json;
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::handlers::cookie::expired_session_cookie;
use crate::shared::SuccessResponse;

/// Logout handler
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<SuccessResponse>) {
    (jar.add(expired_session_cookie()), Json(SuccessResponse::OK))
}
