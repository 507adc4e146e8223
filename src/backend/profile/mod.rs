//! Profile Module
//!
//! The owner's view of their account and the display customisation that
//! appears on their public page.
//!
//! ```text
//! profile/
//! ├── mod.rs      - Module exports
//! ├── avatar.rs   - Avatar file naming and storage
//! ├── update.rs   - Multipart parsing and partial updates
//! └── handlers.rs - GET/PUT /profile
//! ```

pub mod avatar;
pub mod handlers;
pub mod update;

pub use avatar::{AvatarStore, AvatarUpload};
pub use update::{update_profile, ProfileUpdate};
