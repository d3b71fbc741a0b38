//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};

use crate::domain::ports::{
    MockFleetCommand, MockFleetQuery, MockLoginService, MockRegistrationService,
    MockSessionTokenSigner,
};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;

/// Port mocks for one handler test. Unset mocks fail the test if called.
#[derive(Default)]
pub struct TestPorts {
    pub fleet_query: MockFleetQuery,
    pub fleet_command: MockFleetCommand,
    pub login: MockLoginService,
    pub registration: MockRegistrationService,
    pub tokens: MockSessionTokenSigner,
}

impl TestPorts {
    pub fn into_state(self) -> HttpState {
        HttpState {
            fleet_query: Arc::new(self.fleet_query),
            fleet_command: Arc::new(self.fleet_command),
            login: Arc::new(self.login),
            registration: Arc::new(self.registration),
            tokens: Arc::new(self.tokens),
        }
    }
}

/// Build the `/v1` app around `ports`.
pub async fn init_app(
    ports: TestPorts,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(ports.into_state()))
            .configure(configure),
    )
    .await
}
