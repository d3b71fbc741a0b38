//! Embedded PostgreSQL helpers for integration tests.
//!
//! One cluster is shared per test binary. A template database carrying the
//! current migrations is built once, keyed by a hash of the migrations
//! directory, and every test clones its own database from it.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use fleet_backend::outbound::persistence::apply_pending_migrations;
use pg_embedded_setup_unpriv::test_support::hash_directory;
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use uuid::Uuid;

static TEMPLATE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const TEMPLATE_NAME_PREFIX: &str = "fleet_template";
const RETRIES: usize = 5;
const RETRY_DELAY: Duration = Duration::from_millis(500);

fn migrations_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

fn template_database_name() -> Result<String, String> {
    let hash = hash_directory(migrations_dir()).map_err(|err| format!("hash migrations: {err}"))?;
    let short_hash = hash.get(..8).unwrap_or(&hash);
    Ok(format!("{TEMPLATE_NAME_PREFIX}_{short_hash}"))
}

/// Shared cluster for this test binary, retried on bootstrap failure.
pub fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    if std::env::var_os("PG_PASSWORD").is_none() {
        // SAFETY: runs before the cluster spawns threads; the library
        // serialises bootstrap behind its own mutex.
        unsafe {
            std::env::set_var("PG_PASSWORD", "fleet_embedded_test");
        }
    }

    let mut attempt = 1;
    loop {
        match pg_embedded_setup_unpriv::test_support::shared_cluster_handle() {
            Ok(handle) => return Ok(handle),
            Err(error) if attempt >= RETRIES => return Err(format!("{error:?}")),
            Err(_) => {
                std::thread::sleep(RETRY_DELAY);
                attempt += 1;
            }
        }
    }
}

/// Create the migrated template database if it does not exist yet.
fn ensure_template_database(cluster: &ClusterHandle) -> Result<String, String> {
    let template_name = template_database_name()?;
    let _lock = TEMPLATE_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let exists = cluster
        .database_exists(template_name.as_str())
        .map_err(|err| format!("template check: {err:?}"))?;
    if !exists {
        cluster
            .create_database(template_name.as_str())
            .map_err(|err| format!("create template: {err:?}"))?;
        let url = cluster.connection().database_url(&template_name);
        apply_pending_migrations(&url).map_err(|err| err.to_string())?;
    }
    Ok(template_name)
}

/// Provision a fresh migrated database, dropped when the guard goes away.
pub fn provision_template_database(cluster: &ClusterHandle) -> Result<TemporaryDatabase, String> {
    let mut last_error = String::from("create database from template: no attempts made");
    for attempt in 1..=RETRIES {
        let outcome = ensure_template_database(cluster).and_then(|template| {
            let db_name = format!("test_{}", Uuid::new_v4().simple());
            cluster
                .temporary_database_from_template(db_name.as_str(), template.as_str())
                .map_err(|err| format!("create database from template: {err:?}"))
        });
        match outcome {
            Ok(database) => return Ok(database),
            Err(error) => last_error = format!("attempt {attempt}/{RETRIES}: {error}"),
        }
        if attempt < RETRIES {
            std::thread::sleep(RETRY_DELAY);
        }
    }
    Err(last_error)
}
