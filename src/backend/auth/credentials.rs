/**
 * Account Registration and Password Login
 *
 * These two operations sit between the HTTP handlers and the `users`
 * table. They own the rules that must hold regardless of transport:
 * registration collisions name the colliding field, and a failed login
 * looks identical whether the email is unknown or the password is wrong.
 */

use sqlx::PgPool;

use crate::backend::auth::password::{PasswordError, PasswordHasher};
use crate::backend::auth::users::{classify_unique_violation, create_user, get_user_by_email};
use crate::backend::error::{ApiError, ApiResult};
use crate::shared::{LoginRequest, RegisterRequest, UserId};

/// Register a new account and return its id
pub async fn register(
    pool: &PgPool,
    hasher: &PasswordHasher,
    request: &RegisterRequest,
) -> ApiResult<UserId> {
    request.validate()?;

    let email = request.email.trim();
    let username = request.username.trim();

    let password_hash = hasher.hash(request.password.clone()).await.map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::internal("Server error")
    })?;

    let user = create_user(pool, email, username, &password_hash)
        .await
        .map_err(|e| match classify_unique_violation(&e) {
            Some(field) => {
                tracing::warn!("Registration collided on {:?}", field);
                ApiError::Conflict(field)
            }
            None => ApiError::store("Database error occurred", e),
        })?;

    tracing::info!(user_id = user.id, "User registered: {}", user.username);
    Ok(user.id)
}

/// Check an email/password pair and return the user id on success
pub async fn authenticate_by_password(
    pool: &PgPool,
    hasher: &PasswordHasher,
    request: &LoginRequest,
) -> ApiResult<UserId> {
    let hash_error = |e: PasswordError| {
        tracing::error!("Password verification error: {:?}", e);
        ApiError::internal("Server error")
    };

    let user = get_user_by_email(pool, request.email.trim())
        .await
        .map_err(|e| ApiError::store("Server error", e))?;

    let Some(user) = user else {
        hasher.verify_decoy(request.password.clone()).await.map_err(hash_error)?;
        tracing::warn!("Login failed");
        return Err(ApiError::InvalidCredentials);
    };

    let valid = hasher
        .verify(request.password.clone(), user.password_hash.clone())
        .await
        .map_err(hash_error)?;

    if !valid {
        tracing::warn!(user_id = user.id, "Login failed");
        return Err(ApiError::InvalidCredentials);
    }

    tracing::info!(user_id = user.id, "User logged in");
    Ok(user.id)
}
