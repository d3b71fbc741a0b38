//! Driving port for authentication.
//!
//! Inbound adapters call this to exchange credentials for session claims
//! without knowing how accounts are stored or passwords hashed.

use std::fmt;

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::{Error, SessionClaims};

/// Raw login input.
#[derive(Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: Zeroizing<String>,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Verify credentials and return claims for a new session.
    ///
    /// An unknown email yields `not_found`; a wrong password yields
    /// `unauthorized` with reason `password_wrong`.
    async fn authenticate(&self, request: &LoginRequest) -> Result<SessionClaims, Error>;
}
