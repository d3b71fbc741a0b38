//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` so they depend only on domain
//! ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FleetCommand, FleetQuery, LoginService, RegistrationService, SessionTokenSigner,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub fleet_query: Arc<dyn FleetQuery>,
    pub fleet_command: Arc<dyn FleetCommand>,
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn RegistrationService>,
    pub tokens: Arc<dyn SessionTokenSigner>,
}
