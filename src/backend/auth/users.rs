/**
 * User Model and Database Operations
 *
 * This module owns the `users` table: identity, credentials and the
 * display customisation (accent colour, avatar) shown on the public page.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::backend::error::ConflictField;
use crate::shared::{OwnerProfile, UserId};

/// Postgres SQLSTATE for unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: UserId,
    /// User email address (unique)
    pub email: String,
    /// Username (unique, used in the public URL)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Accent colour, `#rrggbb`
    pub accent_color: Option<String>,
    /// Public path of the uploaded avatar
    pub avatar_path: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Owner's view of the profile, including email
    pub fn owner_profile(&self) -> OwnerProfile {
        OwnerProfile {
            id: self.id,
            email: self.email.clone(),
            username: self.username.clone(),
            accent_color: self.accent_color.clone(),
            avatar_path: self.avatar_path.clone(),
        }
    }
}

/// Create a new user
///
/// Unique violations are returned unchanged; use
/// [`classify_unique_violation`] to tell which column collided.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    username: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, username, password_hash)
        VALUES ($1, $2, $3)
        RETURNING id, email, username, password_hash, accent_color, avatar_path, created_at, updated_at
        "#,
    )
    .bind(email)
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

/// Get user by email
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, username, password_hash, accent_color, avatar_path, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &PgPool, id: UserId) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, username, password_hash, accent_color, avatar_path, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Write the supplied display fields; `None` leaves a column untouched
pub async fn update_display(
    pool: &PgPool,
    id: UserId,
    accent_color: Option<&str>,
    avatar_path: Option<&str>,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET accent_color = COALESCE($2, accent_color),
            avatar_path = COALESCE($3, avatar_path),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, email, username, password_hash, accent_color, avatar_path, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(accent_color)
    .bind(avatar_path)
    .fetch_optional(pool)
    .await
}

/// Map a unique violation on `users` to the column that collided
pub fn classify_unique_violation(err: &sqlx::Error) -> Option<ConflictField> {
    let db_err = err.as_database_error()?;
    if db_err.code().as_deref() != Some(UNIQUE_VIOLATION) {
        return None;
    }

    conflict_for_constraint(db_err.constraint()?)
}

fn conflict_for_constraint(constraint: &str) -> Option<ConflictField> {
    match constraint {
        "users_email_key" => Some(ConflictField::Email),
        "users_username_key" => Some(ConflictField::Username),
        _ => None,
    }
}
