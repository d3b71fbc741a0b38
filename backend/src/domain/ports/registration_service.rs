//! Driving port for account registration.

use std::fmt;

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::{Error, SessionClaims};

/// Raw registration input.
#[derive(Clone)]
pub struct RegistrationRequest {
    pub email: String,
    pub password: Zeroizing<String>,
    pub repassword: Zeroizing<String>,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Domain use-case port for creating accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Create an account and return claims for its first session.
    async fn register(&self, request: &RegistrationRequest) -> Result<SessionClaims, Error>;
}
