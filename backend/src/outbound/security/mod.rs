//! Credential adapters: password hashing and session token signing.

mod bcrypt_password_hasher;
mod jwt_session_signer;

pub use bcrypt_password_hasher::{BcryptCostError, BcryptPasswordHasher, MIN_BCRYPT_COST};
pub use jwt_session_signer::{JwtSecretError, JwtSessionSigner};
