/**
 * Link HTTP Handlers
 *
 * All routes except the click counter require a session. Input is
 * validated before the store is touched, and update/delete check
 * ownership first so a foreign link answers 403 without being modified.
 */

use axum::extract::State;
use axum::response::Json;

use crate::backend::error::{ApiError, ApiResult};
use crate::backend::extract::{ApiJson, ApiPath};
use crate::backend::links::db::{self, Ownership};
use crate::backend::links::reorder::reorder;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::{LinkId, LinkInput, LinkView, ReorderRequest, SuccessResponse, UserId};

/// GET /links
pub async fn list_links(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<Vec<LinkView>>> {
    let pool = state.pool()?;

    let links = db::list_links(pool, user_id)
        .await
        .map_err(|e| ApiError::store("Failed to load links", e))?;

    Ok(Json(links.into_iter().map(LinkView::from).collect()))
}

/// POST /links
pub async fn create_link(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(input): ApiJson<LinkInput>,
) -> ApiResult<Json<LinkView>> {
    let link = input.validate()?;
    let pool = state.pool()?;

    let created = db::create_link(pool, user_id, &link)
        .await
        .map_err(|e| ApiError::store("Failed to create link", e))?;

    tracing::info!(user_id, link_id = created.id, position = created.position, "Link created");
    Ok(Json(created.into()))
}

/// PUT /links/{id}
pub async fn update_link(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiPath(link_id): ApiPath<LinkId>,
    ApiJson(input): ApiJson<LinkInput>,
) -> ApiResult<Json<LinkView>> {
    let link = input.validate()?;
    let pool = state.pool()?;

    require_owner(pool, link_id, user_id).await?;

    let updated = db::update_link(pool, user_id, link_id, &link)
        .await
        .map_err(|e| ApiError::store("Failed to update link", e))?
        .ok_or(ApiError::NotFound("Link"))?;

    tracing::info!(user_id, link_id, "Link updated");
    Ok(Json(updated.into()))
}

/// DELETE /links/{id}
pub async fn delete_link(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiPath(link_id): ApiPath<LinkId>,
) -> ApiResult<Json<SuccessResponse>> {
    let pool = state.pool()?;

    require_owner(pool, link_id, user_id).await?;

    let deleted = db::delete_link(pool, user_id, link_id)
        .await
        .map_err(|e| ApiError::store("Failed to delete link", e))?;
    if !deleted {
        return Err(ApiError::NotFound("Link"));
    }

    tracing::info!(user_id, link_id, "Link deleted");
    Ok(Json(SuccessResponse::OK))
}

/// POST /links/reorder
pub async fn reorder_links(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(request): ApiJson<ReorderRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let pool = state.pool()?;

    let count = reorder(pool, user_id, &request.link_ids).await?;

    tracing::info!(user_id, count, "Links reordered");
    Ok(Json(SuccessResponse::OK))
}

/// POST /links/{id}/click
///
/// Public and best-effort: an unknown id is logged and still answers 200.
pub async fn record_click(
    State(state): State<AppState>,
    ApiPath(link_id): ApiPath<LinkId>,
) -> ApiResult<Json<SuccessResponse>> {
    let pool = state.pool()?;

    let counted = db::record_click(pool, link_id)
        .await
        .map_err(|e| ApiError::store("Failed to record click", e))?;
    if !counted {
        tracing::warn!(link_id, "Click for unknown link");
    }

    Ok(Json(SuccessResponse::OK))
}

async fn require_owner(pool: &sqlx::PgPool, link_id: LinkId, user_id: UserId) -> ApiResult<()> {
    let ownership = db::check_ownership(pool, link_id, user_id)
        .await
        .map_err(|e| ApiError::store("Failed to load link", e))?;

    match ownership {
        Ownership::Owned => Ok(()),
        Ownership::NotOwned => {
            tracing::warn!(user_id, link_id, "Rejected access to foreign link");
            Err(ApiError::Forbidden)
        }
        Ownership::Missing => Err(ApiError::NotFound("Link")),
    }
}
