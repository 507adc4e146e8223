//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`register`** - POST /auth/register - Account creation
//! - **`login`** - POST /auth/login - Password login, sets the session cookie
//! - **`logout`** - POST /auth/logout - Expires the session cookie
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── cookie.rs   - Session cookie construction
//! ├── register.rs - Registration handler
//! ├── login.rs    - Login handler
//! └── logout.rs   - Logout handler
//! ```

/// Session cookie helpers
pub mod cookie;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

pub use login::login;
pub use logout::logout;
pub use register::register;
