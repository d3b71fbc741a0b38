//! Embedded schema migrations.
//!
//! The SQL under `backend/migrations` is compiled into the binary. Diesel's
//! migration harness is synchronous, so callers on an async runtime should
//! run [`apply_pending_migrations`] on a blocking thread.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failures while applying migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// Could not open a connection to the target database.
    #[error("migration connection failed: {message}")]
    Connect { message: String },
    /// A migration failed to apply.
    #[error("migration failed: {message}")]
    Apply { message: String },
}

/// Apply every pending migration and return how many ran.
///
/// # Errors
/// Returns [`MigrationError`] when connecting or applying fails.
pub fn apply_pending_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let mut conn = PgConnection::establish(database_url).map_err(|err| MigrationError::Connect {
        message: err.to_string(),
    })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    for version in &applied {
        info!(%version, "applied migration");
    }
    Ok(applied.len())
}
