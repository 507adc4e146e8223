/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * impl that lets the session guard extract the token codec.
 *
 * # Architecture
 *
 * Handlers are stateless between requests; everything durable lives in
 * Postgres. `AppState` only carries shared, immutable collaborators:
 * - the optional connection pool
 * - the session token codec
 * - the password hasher
 * - the avatar store
 * - the loaded configuration
 *
 * Connections are acquired from the pool per query (or per transaction)
 * and returned when the query future or transaction is dropped, on every
 * exit path.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionCodec;
use crate::backend::error::ApiError;
use crate::backend::profile::avatar::AvatarStore;
use crate::backend::server::config::ServerConfig;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// `None` if `DATABASE_URL` is not set or the database was unreachable
    /// at startup; data routes then answer 503.
    pub db_pool: Option<PgPool>,

    /// Session token issuing and verification
    pub sessions: SessionCodec,

    /// Password hashing
    pub passwords: PasswordHasher,

    /// Avatar file storage
    pub avatars: AvatarStore,

    /// Loaded server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state from configuration and an optional pool
    pub fn new(config: ServerConfig, db_pool: Option<PgPool>) -> Self {
        Self {
            db_pool,
            sessions: SessionCodec::new(&config.jwt_secret),
            passwords: PasswordHasher::new(config.bcrypt_cost),
            avatars: AvatarStore::new(config.upload_dir.clone()),
            config: Arc::new(config),
        }
    }

    /// The pool, or 503 if the database is not configured
    pub fn pool(&self) -> Result<&PgPool, ApiError> {
        self.db_pool.as_ref().ok_or_else(|| {
            tracing::error!("Database not configured");
            ApiError::Unavailable
        })
    }
}

impl FromRef<AppState> for SessionCodec {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
