//! bcrypt password hashing.
//!
//! bcrypt is CPU bound, so both operations run on the blocking pool.

use crate::error::{UserError, UserResult};

/// Work factor for newly stored hashes.
pub const DEFAULT_COST: u32 = 10;

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash `password` with a fresh salt.
    pub async fn hash(&self, password: String) -> UserResult<String> {
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| UserError::PasswordHash(e.to_string()))?
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    /// Check `password` against a stored hash.
    ///
    /// A stored value that is not a bcrypt hash never matches.
    pub async fn verify(&self, password: String, hash: String) -> UserResult<bool> {
        let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        match outcome {
            Ok(matches) => Ok(matches),
            Err(e) => {
                tracing::warn!(error = %e, "Stored password is not a valid bcrypt hash");
                Ok(false)
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}
