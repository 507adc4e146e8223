//! Public Module
//!
//! Anonymous, read-only view of a user's page: profile without email,
//! plus links in display order.

pub mod handlers;
pub mod resolver;

pub use resolver::{assemble_public_page, fetch_public_page};
