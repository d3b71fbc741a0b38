//! User accounts held by the credential store.

use std::fmt;

use chrono::{DateTime, Timelike, Utc};

use super::auth::{EmailAddress, PasswordHash};

/// Storage-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User record awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewUser {
    /// Build a record stamped with `now`, truncated to whole seconds.
    pub fn stamped(email: EmailAddress, password_hash: PasswordHash, now: DateTime<Utc>) -> Self {
        let now = truncate_to_seconds(now);
        Self {
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Drop sub-second precision from a timestamp.
pub fn truncate_to_seconds(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.with_nanosecond(0).unwrap_or(instant)
}
