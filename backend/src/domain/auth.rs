//! Credential primitives: email identities, login and registration inputs,
//! and stored password hashes.
//!
//! Plaintext passwords live in `Zeroizing` buffers and never appear in
//! `Debug` output.

use std::fmt;

use zeroize::Zeroizing;

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialValidationError {
    /// Email or password was missing or blank.
    RequiredFields,
    /// Registration password and its confirmation differ.
    PasswordMismatch,
    /// Password is longer than [`MAX_PASSWORD_BYTES`].
    PasswordTooLong,
}

/// Longest password accepted, in bytes. bcrypt ignores anything beyond this.
pub const MAX_PASSWORD_BYTES: usize = 72;

impl fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiredFields => write!(f, "email and password are required"),
            Self::PasswordMismatch => write!(f, "password confirmation does not match"),
            Self::PasswordTooLong => {
                write!(f, "password must be at most {MAX_PASSWORD_BYTES} bytes")
            }
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// User email as entered, trimmed.
///
/// Identity comparisons are case-insensitive; the credential store matches
/// on the lower-cased form.
///
/// # Examples
/// ```
/// use fleet_backend::domain::EmailAddress;
///
/// let email = EmailAddress::new("  Vader@Empire.gov ").expect("valid email");
/// assert_eq!(email.as_str(), "Vader@Empire.gov");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Trim and validate a raw email value.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CredentialValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CredentialValidationError::RequiredFields);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Email as entered by the user.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `email` is trimmed and non-empty.
/// - `password` is non-empty and at most [`MAX_PASSWORD_BYTES`] long;
///   surrounding whitespace is preserved.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialValidationError> {
        let email = EmailAddress::new(email)?;
        if password.is_empty() {
            return Err(CredentialValidationError::RequiredFields);
        }
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(CredentialValidationError::PasswordTooLong);
        }
        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used for the account lookup.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validated registration input.
///
/// Checks run in order: required fields first, then the confirmation match.
///
/// # Examples
/// ```
/// use fleet_backend::domain::{CredentialValidationError, Registration};
///
/// let err = Registration::try_from_parts("tarkin@empire.gov", "moff", "mof")
///     .expect_err("mismatch");
/// assert_eq!(err, CredentialValidationError::PasswordMismatch);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    credentials: LoginCredentials,
}

impl Registration {
    /// Validate raw registration inputs.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        repassword: &str,
    ) -> Result<Self, CredentialValidationError> {
        let credentials = LoginCredentials::try_from_parts(email, password)?;
        if password != repassword {
            return Err(CredentialValidationError::PasswordMismatch);
        }
        Ok(Self { credentials })
    }

    /// Email for the new account.
    pub fn email(&self) -> &EmailAddress {
        self.credentials.email()
    }

    /// Password to hash.
    pub fn password(&self) -> &str {
        self.credentials.password()
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("email", self.email())
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Salted one-way password hash in its encoded (PHC/modular crypt) form.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash produced by a [`PasswordHasher`](super::ports::PasswordHasher).
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded hash string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}
