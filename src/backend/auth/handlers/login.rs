/**
 * Login Handler
 *
 * `POST /auth/login` with `{email, password}`. On success the session
 * token is set as the `token` cookie and the body is `{"success": true}`.
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 401 body
 * - Password verification goes through bcrypt
 * - The token is never placed in the response body or the logs
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::credentials::authenticate_by_password;
use crate::backend::auth::handlers::cookie::session_cookie;
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::extract::ApiJson;
use crate::backend::server::state::AppState;
use crate::shared::{LoginRequest, SuccessResponse};

/// Login handler
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<SuccessResponse>)> {
    let pool = state.pool()?;
    let user_id = authenticate_by_password(pool, &state.passwords, &request).await?;

    let token = state.sessions.issue(user_id).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        ApiError::internal("Server error")
    })?;

    let cookie = session_cookie(token, state.config.secure_cookies(), state.sessions.validity());
    Ok((jar.add(cookie), Json(SuccessResponse::OK)))
}
