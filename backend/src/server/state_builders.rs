//! Wires persistence and credential adapters into the HTTP port bundle.

use std::sync::Arc;

use mockable::DefaultClock;

use fleet_backend::domain::{FleetService, IdentityService};
use fleet_backend::inbound::http::state::HttpState;
use fleet_backend::outbound::persistence::{DieselSpaceshipRepository, DieselUserRepository};
use fleet_backend::outbound::security::{BcryptPasswordHasher, JwtSessionSigner};

use super::ServerConfig;

/// Build the handler state from `config`.
///
/// # Errors
/// Returns [`std::io::Error`] when the hashing cost or signing secret is
/// rejected by its adapter.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let hasher = BcryptPasswordHasher::new(config.bcrypt_cost).map_err(std::io::Error::other)?;
    let signer = JwtSessionSigner::new(&config.jwt_secret).map_err(std::io::Error::other)?;

    let fleet = Arc::new(FleetService::new(Arc::new(DieselSpaceshipRepository::new(
        config.db_pool.clone(),
    ))));
    let identity = Arc::new(IdentityService::new(
        Arc::new(DieselUserRepository::new(config.db_pool.clone())),
        Arc::new(hasher),
        Arc::new(DefaultClock),
    ));

    Ok(HttpState {
        fleet_query: fleet.clone(),
        fleet_command: fleet,
        login: identity.clone(),
        registration: identity,
        tokens: Arc::new(signer),
    })
}
