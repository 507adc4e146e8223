//! Shared Module
//!
//! This module contains the wire types of the linkfolio HTTP API. They are
//! used by the server handlers and by the typed client, and carry the
//! validation rules that can be checked without touching the database.
//!
//! # Overview
//!
//! - **`auth`** - Register/login bodies and username rules
//! - **`profile`** - Owner and public profile views, accent colours
//! - **`link`** - Link views, link input validation, reorder body
//! - **`error`** - Validation errors shared by both sides

/// Authentication request and response types
pub mod auth;

/// Profile types
pub mod profile;

/// Link types
pub mod link;

/// Shared error types
pub mod error;

/// Numeric id of a user row
pub type UserId = i64;

/// Numeric id of a link row
pub type LinkId = i64;

pub use auth::{LoginRequest, RegisterRequest, SuccessResponse};
pub use error::SharedError;
pub use link::{LinkInput, LinkView, ReorderRequest, ValidLink};
pub use profile::{AccentColor, OwnerProfile, PublicPage, PublicProfile};
