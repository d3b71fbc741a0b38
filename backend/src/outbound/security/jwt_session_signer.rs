//! HS256 JSON Web Token signer for session claims.

use jsonwebtoken::{EncodingKey, Header, encode};
use zeroize::Zeroizing;

use crate::domain::SessionClaims;
use crate::domain::ports::{SessionToken, SessionTokenError, SessionTokenSigner};

/// The signing secret was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("JWT secret must not be empty")]
pub struct JwtSecretError;

/// Signs [`SessionClaims`] as compact HS256 tokens.
pub struct JwtSessionSigner {
    key: EncodingKey,
}

impl JwtSessionSigner {
    /// Build a signer from a shared secret.
    ///
    /// # Errors
    /// Returns [`JwtSecretError`] when `secret` is empty.
    pub fn new(secret: &Zeroizing<String>) -> Result<Self, JwtSecretError> {
        if secret.is_empty() {
            return Err(JwtSecretError);
        }
        Ok(Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
        })
    }
}

impl std::fmt::Debug for JwtSessionSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JwtSessionSigner(<redacted>)")
    }
}

impl SessionTokenSigner for JwtSessionSigner {
    fn sign(&self, claims: &SessionClaims) -> Result<SessionToken, SessionTokenError> {
        encode(&Header::default(), claims, &self.key)
            .map(SessionToken::new)
            .map_err(|err| SessionTokenError::signing(err.to_string()))
    }
}
