/**
 * Register Handler
 *
 * `POST /auth/register` with `{email, password, username}`.
 *
 * # Errors
 *
 * * `400 Bad Request` - Missing fields, bad email/username format, or the
 *   email/username is already taken (the message names which)
 * * `503 Service Unavailable` - Database not configured
 * * `500 Internal Server Error` - Hashing or database failure
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::credentials::register as register_account;
use crate::backend::error::ApiResult;
use crate::backend::extract::ApiJson;
use crate::backend::server::state::AppState;
use crate::shared::{RegisterRequest, SuccessResponse};

/// Register handler
///
/// Registration does not log the user in; the client follows up with
/// `POST /auth/login`.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    request.validate().inspect_err(|e| {
        tracing::warn!("Rejected registration: {}", e);
    })?;

    let pool = state.pool()?;
    register_account(pool, &state.passwords, &request).await?;

    Ok(Json(SuccessResponse::OK))
}
