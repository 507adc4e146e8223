/**
 * Avatar Storage
 *
 * Uploaded avatars are written to the upload directory under a name built
 * from the user id, the upload time in milliseconds and a sanitised copy
 * of the original file name: `{userId}-{timestamp}-{originalFilename}`.
 * The directory is served at `/uploads`, and that public path is what gets
 * stored on the user row.
 */

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::shared::UserId;

/// URL prefix the upload directory is served under
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Largest accepted avatar upload
pub const MAX_AVATAR_BYTES: usize = 5 * 1024 * 1024;

const MAX_NAME_LEN: usize = 100;

/// An avatar file received from the client
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Writes avatar files to a directory
#[derive(Debug, Clone)]
pub struct AvatarStore {
    dir: Arc<PathBuf>,
}

impl AvatarStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Arc::new(dir.into()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist an upload and return its public path
    pub async fn save(
        &self,
        user_id: UserId,
        upload: &AvatarUpload,
        uploaded_at: DateTime<Utc>,
    ) -> std::io::Result<String> {
        tokio::fs::create_dir_all(self.dir.as_path()).await?;

        let name = avatar_file_name(user_id, uploaded_at, &upload.file_name);
        tokio::fs::write(self.dir.join(&name), &upload.bytes).await?;

        tracing::debug!(user_id, "Stored avatar {}", name);
        Ok(format!("{}/{}", PUBLIC_PREFIX, name))
    }
}

/// `{userId}-{timestampMillis}-{sanitisedName}`
pub fn avatar_file_name(user_id: UserId, uploaded_at: DateTime<Utc>, original: &str) -> String {
    format!(
        "{}-{}-{}",
        user_id,
        uploaded_at.timestamp_millis(),
        sanitize_file_name(original)
    )
}

/// Reduce a client-supplied file name to `[A-Za-z0-9._-]`, without any
/// directory part or leading dots
pub fn sanitize_file_name(original: &str) -> String {
    let base = original.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_NAME_LEN)
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "avatar".to_string()
    } else {
        cleaned.to_string()
    }
}
