//! Backend entry-point: loads settings, prepares the database, and serves
//! the `/v1` API.

mod server;

use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tokio::task;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use fleet_backend::outbound::persistence::{DbPool, PoolConfig, apply_pending_migrations};
use fleet_backend::settings::AppSettings;

use server::{ServerConfig, create_server};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(error) = fmt().with_env_filter(filter).json().try_init() {
        warn!(%error, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let database_url = settings.database_url()?.to_owned();

    if settings.run_migrations {
        let url = database_url.clone();
        let applied = task::spawn_blocking(move || apply_pending_migrations(&url))
            .await
            .wrap_err("migration task panicked")??;
        info!(applied, "database migrations complete");
    }

    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
    )
    .await?;

    let config = ServerConfig::new(settings.bind_addr()?, pool, settings.jwt_secret()?)
        .with_bcrypt_cost(settings.bcrypt_cost()?)
        .with_request_timeout(settings.request_timeout());
    info!(bind_addr = %config.bind_addr(), "starting HTTP server");

    create_server(config)?.await?;
    Ok(())
}
