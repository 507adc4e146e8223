//! Backend Module
//!
//! This module contains all server-side code for linkfolio: an Axum HTTP
//! server that stores users and links in PostgreSQL, authenticates with a
//! signed session cookie, and serves each user's public link page.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, password login, session tokens
//! - **`profile`** - Owner profile, accent colour and avatar uploads
//! - **`links`** - Link CRUD, reorder, click counting
//! - **`public`** - Anonymous profile resolver
//! - **`middleware`** - Session extractor and page gate
//! - **`extract`** - JSON, path and multipart extractors with API errors
//! - **`error`** - Backend error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── profile/        - Profile updates
//! ├── links/          - Link store
//! ├── public/         - Public page resolver
//! ├── middleware/     - Request middleware
//! ├── extract.rs      - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers are stateless between requests. `AppState` carries only the
//! optional `PgPool` and immutable collaborators; every row lives in
//! Postgres.
//!
//! # Error Handling
//!
//! Handlers return `ApiResult<T>`; `ApiError` renders as
//! `{"error": ..., "status": ...}` with the matching status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Owner profile and avatar uploads
pub mod profile;

/// Link store
pub mod links;

/// Public profile resolver
pub mod public;

/// Middleware for request processing
pub mod middleware;

/// Request extractors
pub mod extract;

pub use error::{ApiError, ApiResult};
pub use server::{create_app, AppState, ServerConfig};
