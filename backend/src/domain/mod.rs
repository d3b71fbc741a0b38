//! Domain layer: fleet and identity value types, services, and ports.
//!
//! Nothing here depends on actix or Diesel; adapters live under
//! `inbound` and `outbound`.

mod armament;
mod auth;
mod error;
mod fleet_service;
mod identity_service;
pub mod ports;
mod session;
mod spaceship;
mod user;

pub use self::armament::{ArmamentItem, ArmamentLoadout};
pub use self::auth::{
    CredentialValidationError, EmailAddress, LoginCredentials, MAX_PASSWORD_BYTES, PasswordHash,
    Registration,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::fleet_service::FleetService;
pub use self::identity_service::IdentityService;
pub use self::session::{SESSION_TTL_HOURS, SessionClaims, session_ttl};
pub use self::spaceship::{
    MAX_TEXT_CHARS, Spaceship, SpaceshipDraft, SpaceshipId, SpaceshipName, SpaceshipStatus,
    SpaceshipSummary, SpaceshipValidationError,
};
pub use self::user::{NewUser, User, UserId, truncate_to_seconds};
