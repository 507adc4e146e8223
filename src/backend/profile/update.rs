/**
 * Profile Updates
 *
 * `PUT /profile` is a multipart form with two optional parts,
 * `accentColor` and `avatar`. It is parsed into an explicit
 * [`ProfileUpdate`] in which at least one field must be present; only the
 * supplied fields are written.
 */

use axum::extract::multipart::{Field, Multipart, MultipartError};
use axum::http::StatusCode;
use chrono::Utc;
use sqlx::PgPool;

use crate::backend::auth::users::{update_display, User};
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::profile::avatar::{AvatarStore, AvatarUpload, MAX_AVATAR_BYTES};
use crate::shared::{AccentColor, UserId};

/// A partial profile update; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub accent_color: Option<AccentColor>,
    pub avatar: Option<AvatarUpload>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.accent_color.is_none() && self.avatar.is_none()
    }

    /// Read the recognised parts of a multipart body; unknown parts are skipped
    pub async fn from_multipart(mut multipart: Multipart) -> ApiResult<Self> {
        let mut update = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("accentColor") => {
                    let raw = field.text().await.map_err(multipart_error)?;
                    if !raw.trim().is_empty() {
                        update.accent_color = Some(AccentColor::parse(&raw)?);
                    }
                }
                Some("avatar") => {
                    update.avatar = read_avatar(field).await?;
                }
                other => {
                    tracing::debug!("Ignoring multipart field {:?}", other);
                }
            }
        }

        Ok(update)
    }
}

async fn read_avatar(field: Field<'_>) -> ApiResult<Option<AvatarUpload>> {
    if let Some(content_type) = field.content_type() {
        if !content_type.starts_with("image/") && content_type != "application/octet-stream" {
            return Err(ApiError::invalid_input("Avatar must be an image"));
        }
    }

    let file_name = field.file_name().unwrap_or("avatar").to_string();
    let bytes = field.bytes().await.map_err(multipart_error)?;

    if bytes.is_empty() {
        return Ok(None);
    }
    if bytes.len() > MAX_AVATAR_BYTES {
        return Err(ApiError::invalid_input("Avatar must be at most 5 MiB"));
    }

    Ok(Some(AvatarUpload { file_name, bytes }))
}

fn multipart_error(err: MultipartError) -> ApiError {
    tracing::warn!("Rejected multipart body: {}", err.body_text());
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::invalid_input("Avatar must be at most 5 MiB")
    } else {
        ApiError::invalid_input("Malformed multipart body")
    }
}

/// Apply a profile update: store the avatar file first, then write the row
pub async fn update_profile(
    pool: &PgPool,
    avatars: &AvatarStore,
    user_id: UserId,
    update: ProfileUpdate,
) -> ApiResult<User> {
    if update.is_empty() {
        return Err(ApiError::invalid_input("No fields to update"));
    }

    let avatar_path = match &update.avatar {
        Some(upload) => Some(avatars.save(user_id, upload, Utc::now()).await.map_err(|e| {
            tracing::error!(user_id, "Failed to store avatar: {:?}", e);
            ApiError::internal("Failed to store avatar")
        })?),
        None => None,
    };

    let accent_color = update.accent_color.as_ref().map(AccentColor::as_str);

    let user = update_display(pool, user_id, accent_color, avatar_path.as_deref())
        .await
        .map_err(|e| ApiError::store("Failed to update profile", e))?
        .ok_or(ApiError::NotFound("User"))?;

    tracing::info!(
        user_id,
        accent_color = ?accent_color,
        avatar = avatar_path.is_some(),
        "Profile updated"
    );
    Ok(user)
}
