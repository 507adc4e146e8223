//! Authentication Module
//!
//! This module handles account registration, password login and the
//! stateless session tokens that authenticate every later request.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and `users` table operations
//! ├── password.rs     - bcrypt hashing on the blocking pool
//! ├── credentials.rs  - register / authenticate_by_password
//! ├── sessions.rs     - JWT session tokens
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email, password, username → account created
//! 2. **Login**: email, password → credentials verified → `token` cookie set
//! 3. **Authenticated request**: cookie → token verified → user id
//! 4. **Logout**: cookie expired client-side
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are signed JWTs that expire after 7 days
//! - Invalid credentials return 401 with no information leakage

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// Registration and password login
pub mod credentials;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use credentials::{authenticate_by_password, register};
pub use sessions::{AuthFailure, SessionCodec};
