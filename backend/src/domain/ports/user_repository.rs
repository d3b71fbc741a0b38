//! Driven port for the credential store.
use async_trait::async_trait;

use crate::domain::{EmailAddress, NewUser, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// No account matches the email.
        NotFound { email: String } => "no user registered for {email}",
        /// An account with the same email (ignoring case) exists.
        Conflict { email: String } => "user {email} already exists",
        /// Repository connection could not be established.
        Connection { operation: String, message: String } =>
            "{operation}: user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { operation: String, message: String } =>
            "{operation}: user repository query failed: {message}",
    }
}

/// Credential store keyed by case-insensitive unique email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the account whose email matches, ignoring case.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<User, UserPersistenceError>;

    /// Insert a new account. Fails with `Conflict` when the email is taken,
    /// including when a concurrent insert wins the race.
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError>;
}
