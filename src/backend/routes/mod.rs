//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── api_routes.rs   - JSON API endpoints
//! └── page_routes.rs  - Gated HTML entry points
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use linkfolio::backend::routes::create_router;
//! use linkfolio::backend::server::config::ServerConfig;
//! use linkfolio::backend::server::state::AppState;
//!
//! let app_state = AppState::new(ServerConfig::default(), None);
//! let router = create_router(app_state);
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

/// Page entry points
pub mod page_routes;

pub use router::create_router;
