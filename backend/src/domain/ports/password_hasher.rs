//! Driven port for slow, salted password hashing.

use async_trait::async_trait;

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Failures raised by password hashing adapters.
    pub enum PasswordHashError {
        /// The hashing primitive rejected the input or failed internally.
        Hashing { message: String } => "password hashing failed: {message}",
        /// The stored hash could not be parsed.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
        /// The password exceeds what the primitive can hash without truncation.
        TooLong { length: usize } => "password of {length} bytes is too long to hash",
    }
}

/// One-way password hashing.
///
/// Implementations are expected to be CPU-heavy and must not block the
/// async executor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password with a fresh salt.
    async fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashError>;

    /// Check a plaintext password against a stored hash.
    async fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError>;
}
