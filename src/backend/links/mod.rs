//! Links Module
//!
//! A user's titled URLs, their display order and click counts.
//!
//! ```text
//! links/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - `links` table operations and ownership checks
//! ├── reorder.rs  - Transactional reorder and its planning rules
//! └── handlers.rs - /links HTTP handlers
//! ```

pub mod db;
pub mod handlers;
pub mod reorder;

pub use db::{Link, Ownership};
pub use reorder::{plan_reorder, reorder, ReorderError};
