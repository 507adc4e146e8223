//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - The `AuthUser` session extractor and the page gate
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::response::Json;
//! use linkfolio::backend::middleware::AuthUser;
//!
//! async fn whoami(AuthUser(user_id): AuthUser) -> Json<i64> {
//!     Json(user_id)
//! }
//! ```

pub mod auth;

pub use auth::{authenticate_jar, page_gate, AuthUser};
