//! bcrypt-backed `PasswordHasher`.
//!
//! bcrypt is deliberately slow, so both hashing and verification run on the
//! blocking thread pool rather than the async executor. bcrypt only reads the
//! first 72 bytes of its input, so longer passwords are refused instead of
//! being silently truncated.

use async_trait::async_trait;
use tokio::task;

use crate::domain::{MAX_PASSWORD_BYTES, PasswordHash};
use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Lowest work factor accepted for production hashing.
pub const MIN_BCRYPT_COST: u32 = 12;
const MAX_BCRYPT_COST: u32 = 31;

/// Rejected work factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("bcrypt cost {cost} is outside 12..=31")]
pub struct BcryptCostError {
    /// The cost that was requested.
    pub cost: u32,
}

/// Salted bcrypt hashing with a fixed work factor.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Build a hasher with `cost`.
    ///
    /// # Errors
    /// Returns [`BcryptCostError`] when `cost` is below [`MIN_BCRYPT_COST`]
    /// or above bcrypt's maximum of 31.
    pub fn new(cost: u32) -> Result<Self, BcryptCostError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
            return Err(BcryptCostError { cost });
        }
        Ok(Self { cost })
    }

    #[cfg(test)]
    fn fast() -> Self {
        Self { cost: 4 }
    }
}

fn join_failure(error: task::JoinError) -> PasswordHashError {
    PasswordHashError::hashing(format!("hashing task failed: {error}"))
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordHashError::too_long(password.len()));
        }
        let cost = self.cost;
        let password = zeroize::Zeroizing::new(password.to_owned());
        let encoded = task::spawn_blocking(move || bcrypt::hash(password.as_bytes(), cost))
            .await
            .map_err(join_failure)?
            .map_err(|err| PasswordHashError::hashing(err.to_string()))?;
        Ok(PasswordHash::new(encoded))
    }

    async fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError> {
        // Nothing longer than the limit is ever hashed, so it cannot match.
        if password.len() > MAX_PASSWORD_BYTES {
            return Ok(false);
        }
        let password = zeroize::Zeroizing::new(password.to_owned());
        let stored = hash.as_str().to_owned();
        task::spawn_blocking(move || bcrypt::verify(password.as_bytes(), &stored))
            .await
            .map_err(join_failure)?
            .map_err(|err| PasswordHashError::malformed_hash(err.to_string()))
    }
}
