/**
 * Password Hashing
 *
 * Wraps bcrypt so that hashing and verification run on the blocking thread
 * pool instead of stalling the async workers.
 */

use std::sync::{Arc, OnceLock};

use tokio::task;

/// Errors from the hashing primitive or the blocking pool
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("hashing task failed: {0}")]
    Join(#[from] task::JoinError),
}

/// Salted, slow one-way password hashing
#[derive(Clone, Debug)]
pub struct PasswordHasher {
    cost: u32,
    decoy: Arc<OnceLock<String>>,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self {
            cost,
            decoy: Arc::new(OnceLock::new()),
        }
    }

    /// Hash a password with a fresh salt
    pub async fn hash(&self, password: String) -> Result<String, PasswordError> {
        let cost = self.cost;
        let hashed = task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hashed)
    }

    /// Verify a password against a stored hash
    pub async fn verify(&self, password: String, hash: String) -> Result<bool, PasswordError> {
        let valid = task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
        Ok(valid)
    }

    /// Burn the same work as a real verification when the email is unknown,
    /// so response time does not reveal which accounts exist.
    pub async fn verify_decoy(&self, password: String) -> Result<(), PasswordError> {
        let decoy = self.decoy.clone();
        let cost = self.cost;
        task::spawn_blocking(move || -> Result<(), bcrypt::BcryptError> {
            let hash = match decoy.get() {
                Some(hash) => hash.clone(),
                None => {
                    let hash = bcrypt::hash("linkfolio-decoy", cost)?;
                    decoy.get_or_init(|| hash).clone()
                }
            };
            bcrypt::verify(password, &hash)?;
            Ok(())
        })
        .await??;
        Ok(())
    }
}
