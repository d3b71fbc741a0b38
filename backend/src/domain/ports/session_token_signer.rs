//! Driven port turning session claims into an opaque signed token.

use std::fmt;

use crate::domain::SessionClaims;

use super::define_port_error;

define_port_error! {
    /// Failures raised by token signing adapters.
    pub enum SessionTokenError {
        /// The claims could not be encoded or signed.
        Signing { message: String } => "session token signing failed: {message}",
    }
}

/// Signed, opaque session token.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap an encoded token.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded token string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Consume the wrapper.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Signing capability for session claims.
#[cfg_attr(test, mockall::automock)]
pub trait SessionTokenSigner: Send + Sync {
    /// Sign the claims.
    fn sign(&self, claims: &SessionClaims) -> Result<SessionToken, SessionTokenError>;
}
