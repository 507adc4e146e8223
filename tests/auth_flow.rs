//! Registration, login and profile tests against Postgres
//!
//! Skipped when `DATABASE_URL` is not set.

#![cfg(feature = "ssr")]

mod common;

use axum::http::StatusCode;
use axum_extra::extract::cookie::SameSite;
use axum_test::multipart::{MultipartForm, Part};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use serial_test::serial;

use common::*;
use linkfolio::backend::auth::sessions::SESSION_COOKIE;
use linkfolio::shared::OwnerProfile;

fn registration(email: &str, username: &str) -> Value {
    json!({"email": email, "password": "s3cret-pass", "username": username})
}

#[tokio::test]
#[serial]
async fn test_register_then_login_yields_working_session() {
    let Some(db) = TestDatabase::connect().await else { return };
    let app = test_app(Some(db.pool().clone()));

    let response = app
        .server
        .post("/auth/register")
        .json(&registration("frank@example.com", "frank"))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"success": true}));

    let response = app
        .server
        .post("/auth/login")
        .json(&json!({"email": "frank@example.com", "password": "s3cret-pass"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"success": true}));

    let cookie = response.cookie(SESSION_COOKIE);
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(time::Duration::days(7)));

    let user_id = app.sessions.authenticate(cookie.value()).unwrap();

    let response = app
        .server
        .get("/profile")
        .add_header(cookie_header_name(), session_header(cookie.value()))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let profile: OwnerProfile = response.json();
    assert_eq!(profile.id, user_id);
    assert_eq!(profile.email, "frank@example.com");
    assert_eq!(profile.username, "frank");
    assert_eq!(profile.accent_color, None);
}

#[tokio::test]
#[serial]
async fn test_duplicate_email_and_username_name_the_field() {
    let Some(db) = TestDatabase::connect().await else { return };
    let app = test_app(Some(db.pool().clone()));

    let response = app
        .server
        .post("/auth/register")
        .json(&registration("grace@example.com", "grace"))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app
        .server
        .post("/auth/register")
        .json(&registration("grace@example.com", "someone-else"))
        .await;
    assert_api_error!(response, StatusCode::BAD_REQUEST, "Email already exists");

    let response = app
        .server
        .post("/auth/register")
        .json(&registration("other@example.com", "grace"))
        .await;
    assert_api_error!(response, StatusCode::BAD_REQUEST, "Username already exists");
}

#[tokio::test]
#[serial]
async fn test_login_failures_are_indistinguishable() {
    let Some(db) = TestDatabase::connect().await else { return };
    let app = test_app(Some(db.pool().clone()));
    let user = create_test_user(db.pool(), &app.sessions, "heidi").await;

    let unknown = app
        .server
        .post("/auth/login")
        .json(&json!({"email": "nobody@example.com", "password": user.password}))
        .await;
    let wrong = app
        .server
        .post("/auth/login")
        .json(&json!({"email": user.email, "password": "not-the-password"}))
        .await;

    assert_api_error!(unknown, StatusCode::UNAUTHORIZED, "Invalid credentials");
    assert_api_error!(wrong, StatusCode::UNAUTHORIZED, "Invalid credentials");
    assert_eq!(unknown.text(), wrong.text());
    assert!(unknown.maybe_cookie(SESSION_COOKIE).is_none());
}

#[tokio::test]
#[serial]
async fn test_profile_of_deleted_user_is_not_found() {
    let Some(db) = TestDatabase::connect().await else { return };
    let app = test_app(Some(db.pool().clone()));
    let user = create_test_user(db.pool(), &app.sessions, "ivan").await;

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user.id)
        .execute(db.pool())
        .await
        .unwrap();

    let response = app
        .server
        .get("/profile")
        .add_header(cookie_header_name(), user.cookie())
        .await;
    assert_api_error!(response, StatusCode::NOT_FOUND, "User not found");
}

#[tokio::test]
#[serial]
async fn test_update_profile_writes_only_supplied_fields() {
    let Some(db) = TestDatabase::connect().await else { return };
    let app = test_app(Some(db.pool().clone()));
    let user = create_test_user(db.pool(), &app.sessions, "judy").await;

    let form = MultipartForm::new().add_text("accentColor", "#FF6B6B");
    let response = app
        .server
        .put("/profile")
        .add_header(cookie_header_name(), user.cookie())
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let profile: OwnerProfile = response.json();
    assert_eq!(profile.accent_color.as_deref(), Some("#ff6b6b"));
    assert_eq!(profile.avatar_path, None);

    let avatar = Part::bytes(b"\x89PNG fake".as_slice())
        .file_name("my photo.png")
        .mime_type("image/png");
    let form = MultipartForm::new().add_part("avatar", avatar);
    let response = app
        .server
        .put("/profile")
        .add_header(cookie_header_name(), user.cookie())
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let profile: OwnerProfile = response.json();

    assert_eq!(profile.accent_color.as_deref(), Some("#ff6b6b"));
    let avatar_path = profile.avatar_path.expect("avatar path stored");
    let prefix = format!("/uploads/{}-", user.id);
    assert!(avatar_path.starts_with(&prefix), "{}", avatar_path);
    assert!(avatar_path.ends_with("-my_photo.png"), "{}", avatar_path);

    let file_name = avatar_path.trim_start_matches("/uploads/");
    let stored = std::fs::read(app.uploads.path().join(file_name)).unwrap();
    assert_eq!(stored, b"\x89PNG fake");

    let response = app.server.get(&avatar_path).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
#[serial]
async fn test_update_profile_rejects_empty_and_invalid_updates() {
    let Some(db) = TestDatabase::connect().await else { return };
    let app = test_app(Some(db.pool().clone()));
    let user = create_test_user(db.pool(), &app.sessions, "karl").await;

    let response = app
        .server
        .put("/profile")
        .add_header(cookie_header_name(), user.cookie())
        .multipart(MultipartForm::new().add_text("unrelated", "x"))
        .await;
    assert_api_error!(response, StatusCode::BAD_REQUEST, "No fields to update");

    let response = app
        .server
        .put("/profile")
        .add_header(cookie_header_name(), user.cookie())
        .multipart(MultipartForm::new().add_text("accentColor", "red"))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
