//! linkfolio - Main Library
//!
//! linkfolio is a link-in-bio publisher: a user registers, curates an
//! ordered list of titled links, picks an accent colour and avatar, and
//! gets a public page at `/users/{username}` that counts clicks.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared by the server and the client
//!   - Register/login bodies, profile views, link views
//!   - Validation that needs no database (usernames, URLs, colours)
//!   - Error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and routes
//!   - Session cookie authentication
//!   - PostgreSQL persistence for users and links
//!
//! - **`client`** - Typed async HTTP client with an identity cache
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Server dependencies and the `backend` module
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use linkfolio::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::from_env()?).await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Client
//!
//! ```rust,no_run
//! use linkfolio::client::LinkfolioClient;
//! use linkfolio::shared::{LinkInput, LoginRequest};
//!
//! # async fn example() -> Result<(), linkfolio::client::ClientError> {
//! let client = LinkfolioClient::new("http://127.0.0.1:3000")?;
//! client.login(&LoginRequest::new("me@example.com", "hunter22")).await?;
//! client.create_link(&LinkInput::new("Blog", "https://blog.example.com")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation failures
//! - `backend::ApiError` for HTTP handler failures
//! - `client::ClientError` for client-side failures

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// Typed HTTP client
pub mod client;
