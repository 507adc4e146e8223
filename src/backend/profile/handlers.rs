//! Profile HTTP handlers
//!
//! - `GET /profile` - the caller's own profile, email included
//! - `PUT /profile` - multipart update of accent colour and/or avatar

use axum::extract::State;
use axum::response::Json;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::extract::ApiMultipart;
use crate::backend::middleware::AuthUser;
use crate::backend::profile::update::{update_profile, ProfileUpdate};
use crate::backend::server::state::AppState;
use crate::shared::OwnerProfile;

/// Get the authenticated user's profile
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<OwnerProfile>> {
    let pool = state.pool()?;

    let user = get_user_by_id(pool, user_id)
        .await
        .map_err(|e| ApiError::store("Failed to load profile", e))?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(user.owner_profile()))
}

/// Update the authenticated user's accent colour and/or avatar
pub async fn put_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiMultipart(multipart): ApiMultipart,
) -> ApiResult<Json<OwnerProfile>> {
    let pool = state.pool()?;
    let update = ProfileUpdate::from_multipart(multipart).await?;

    let user = update_profile(pool, &state.avatars, user_id, update).await?;
    Ok(Json(user.owner_profile()))
}
