//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use actix_web::dev::Server;
use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web};

use fleet_backend::inbound::http::configure;
use fleet_backend::trace_requests;

use state_builders::build_http_state;

/// Construct the HTTP server for `config`.
///
/// The returned [`Server`] must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when adapter construction or binding the
/// socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config)?);
    let ServerConfig {
        bind_addr,
        request_timeout,
        ..
    } = config;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_state.clone())
            .wrap(from_fn(trace_requests))
            .configure(configure)
    })
    .client_request_timeout(request_timeout)
    .bind(bind_addr)?
    .run();

    Ok(server)
}
