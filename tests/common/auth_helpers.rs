//! Test server and authentication helpers
//!
//! Provides utilities for building an app around a test pool, creating
//! users directly in the database and minting session cookies.

use axum::http::header::COOKIE;
use axum::http::HeaderValue;
use axum_test::TestServer;
use sqlx::PgPool;
use tempfile::TempDir;

use linkfolio::backend::auth::sessions::{SessionCodec, SESSION_COOKIE};
use linkfolio::backend::auth::users::create_user;
use linkfolio::backend::routes::create_router;
use linkfolio::backend::server::{AppState, ServerConfig};
use linkfolio::shared::UserId;

pub const TEST_SECRET: &str = "linkfolio-test-secret";
pub const TEST_PASSWORD: &str = "correct horse battery";

/// A running test app and the directory its avatars are written to
pub struct TestApp {
    pub server: TestServer,
    pub uploads: TempDir,
    pub sessions: SessionCodec,
}

/// Configuration with a cheap bcrypt cost and a throwaway upload directory
pub fn test_config(uploads: &TempDir) -> ServerConfig {
    ServerConfig {
        jwt_secret: TEST_SECRET.to_string(),
        upload_dir: uploads.path().to_path_buf(),
        bcrypt_cost: 4,
        ..ServerConfig::default()
    }
}

/// Build a test server; `None` pool gives the "database not configured" app
pub fn test_app(pool: Option<PgPool>) -> TestApp {
    let uploads = tempfile::tempdir().expect("Failed to create upload dir");
    let state = AppState::new(test_config(&uploads), pool);
    let sessions = state.sessions.clone();
    let server = TestServer::new(create_router(state)).expect("Failed to start test server");

    TestApp {
        server,
        uploads,
        sessions,
    }
}

/// `Cookie` header value carrying a session token
pub fn session_header(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("{}={}", SESSION_COOKIE, token)).expect("Invalid cookie value")
}

pub fn cookie_header_name() -> axum::http::HeaderName {
    COOKIE
}

/// Test user credentials
pub struct TestUser {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub password: String,
    pub token: String,
}

impl TestUser {
    pub fn cookie(&self) -> HeaderValue {
        session_header(&self.token)
    }
}

/// Create a user directly in the database and mint their session token
pub async fn create_test_user(pool: &PgPool, sessions: &SessionCodec, username: &str) -> TestUser {
    let email = format!("{}@example.com", username);
    let password_hash = bcrypt::hash(TEST_PASSWORD, 4).expect("Failed to hash password");

    let user = create_user(pool, &email, username, &password_hash)
        .await
        .expect("Failed to create test user");
    let token = sessions.issue(user.id).expect("Failed to create test token");

    TestUser {
        id: user.id,
        email: user.email,
        username: user.username,
        password: TEST_PASSWORD.to_string(),
        token,
    }
}
