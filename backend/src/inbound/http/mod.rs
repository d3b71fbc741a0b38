//! HTTP inbound adapter exposing the `/v1` REST endpoints.

pub mod auth;
pub mod error;
pub mod spaceships;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;

use actix_web::web;

pub use error::ApiResult;

/// Register every `/v1` route. Handlers expect `web::Data<HttpState>` in
/// app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use fleet_backend::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1")
            .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
            .service(spaceships::list_spaceships)
            .service(spaceships::get_spaceship)
            .service(spaceships::create_spaceship)
            .service(spaceships::update_spaceship)
            .service(spaceships::delete_spaceship)
            .service(auth::login)
            .service(auth::register),
    );
}
