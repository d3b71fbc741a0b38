//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`FleetQuery`, `FleetCommand`, `LoginService`,
//! `RegistrationService`) are implemented by domain services and called by
//! inbound adapters. Driven ports (`SpaceshipRepository`, `UserRepository`,
//! `PasswordHasher`, `SessionTokenSigner`) are implemented by outbound
//! adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod fleet_command;
mod fleet_query;
mod login_service;
mod password_hasher;
mod registration_service;
mod session_token_signer;
mod spaceship_repository;
mod user_repository;

pub use fleet_command::{ArmamentPayload, FleetCommand, SpaceshipPayload};
#[cfg(test)]
pub use fleet_command::MockFleetCommand;
pub use fleet_query::FleetQuery;
#[cfg(test)]
pub use fleet_query::MockFleetQuery;
pub use login_service::{LoginRequest, LoginService};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use registration_service::{RegistrationRequest, RegistrationService};
#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use session_token_signer::{SessionToken, SessionTokenError, SessionTokenSigner};
#[cfg(test)]
pub use session_token_signer::MockSessionTokenSigner;
pub use spaceship_repository::{SpaceshipRepository, SpaceshipRepositoryError};
#[cfg(test)]
pub use spaceship_repository::MockSpaceshipRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
