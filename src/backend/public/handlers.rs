//! Public profile handler

use axum::extract::State;
use axum::response::Json;

use crate::backend::error::{ApiError, ApiResult};
use crate::backend::extract::ApiPath;
use crate::backend::public::resolver::fetch_public_page;
use crate::backend::server::state::AppState;
use crate::shared::PublicPage;

/// GET /users/{username}
pub async fn get_public_profile(
    State(state): State<AppState>,
    ApiPath(username): ApiPath<String>,
) -> ApiResult<Json<PublicPage>> {
    let pool = state.pool()?;

    let page = fetch_public_page(pool, &username)
        .await
        .map_err(|e| ApiError::store("Failed to fetch profile", e))?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(page))
}
