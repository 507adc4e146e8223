//! Backend Error Module
//!
//! This module defines the error taxonomy used by every HTTP handler and
//! its conversion into JSON responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError and ConflictField
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Propagation
//!
//! Validation and ownership checks fail fast in the handler before the
//! store is touched. Store errors are classified where they occur
//! (unique violations become `Conflict`, everything else `Internal`) and
//! the raw error is only ever logged.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{ApiError, ConflictField};

/// Result alias used by handlers
pub type ApiResult<T> = Result<T, ApiError>;
