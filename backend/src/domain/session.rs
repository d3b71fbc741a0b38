//! Session claims issued after successful registration or login.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::auth::EmailAddress;
use super::user::truncate_to_seconds;

/// Lifetime of an issued session, in hours (seven days).
pub const SESSION_TTL_HOURS: i64 = 168;

/// Claim set carried by a signed session token.
///
/// `exp` is an absolute Unix timestamp in seconds.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use fleet_backend::domain::{EmailAddress, SessionClaims};
///
/// let issued = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
/// let email = EmailAddress::new("thrawn@empire.gov").unwrap();
/// let claims = SessionClaims::issue(&email, issued);
/// assert_eq!(claims.exp - issued.timestamp(), 7 * 24 * 60 * 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account email as stored.
    pub email: String,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

impl SessionClaims {
    /// Issue claims for `email` at `now`.
    pub fn issue(email: &EmailAddress, now: DateTime<Utc>) -> Self {
        let expires_at = truncate_to_seconds(now) + session_ttl();
        Self {
            email: email.as_str().to_owned(),
            exp: expires_at.timestamp(),
        }
    }

}

/// Session lifetime as a duration.
pub fn session_ttl() -> Duration {
    Duration::hours(SESSION_TTL_HOURS)
}
