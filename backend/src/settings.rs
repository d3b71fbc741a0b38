//! Runtime configuration loaded via OrthoConfig.
//!
//! Values merge from CLI flags and `FLEET_*` environment variables. Raw
//! fields stay optional so loading never fails on a missing value; the
//! accessors apply defaults and reject values the service cannot run with.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use zeroize::Zeroizing;

use crate::outbound::security::MIN_BCRYPT_COST;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_BCRYPT_COST: u32 = MIN_BCRYPT_COST;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings problems detected after loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// A required value was absent or blank.
    #[error("{name} must be set")]
    Missing { name: &'static str },
    /// A value was present but unusable.
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Service configuration.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FLEET")]
pub struct AppSettings {
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Shared secret for signing session tokens.
    pub jwt_secret: Option<String>,
    /// Socket address for the HTTP listener.
    pub bind_addr: Option<String>,
    /// bcrypt work factor.
    pub bcrypt_cost: Option<u32>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Client request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
    /// Apply pending migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
}

impl std::fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppSettings")
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("bind_addr", &self.bind_addr)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("db_max_connections", &self.db_max_connections)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

fn required<'a>(value: Option<&'a String>, name: &'static str) -> Result<&'a str, SettingsError> {
    value
        .map(String::as_str)
        .filter(|raw| !raw.trim().is_empty())
        .ok_or(SettingsError::Missing { name })
}

impl AppSettings {
    /// Database URL.
    ///
    /// # Errors
    /// [`SettingsError::Missing`] when unset or blank.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        required(self.database_url.as_ref(), "FLEET_DATABASE_URL")
    }

    /// Token signing secret, copied into a zeroizing buffer.
    ///
    /// # Errors
    /// [`SettingsError::Missing`] when unset or empty.
    pub fn jwt_secret(&self) -> Result<Zeroizing<String>, SettingsError> {
        match self.jwt_secret.as_deref() {
            Some(secret) if !secret.is_empty() => Ok(Zeroizing::new(secret.to_owned())),
            _ => Err(SettingsError::Missing {
                name: "FLEET_JWT_SECRET",
            }),
        }
    }

    /// Listener address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// [`SettingsError::Invalid`] when the value is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.trim().parse().map_err(|err: std::net::AddrParseError| {
            SettingsError::Invalid {
                name: "FLEET_BIND_ADDR",
                reason: err.to_string(),
            }
        })
    }

    /// bcrypt cost, defaulting to 12.
    ///
    /// # Errors
    /// [`SettingsError::Invalid`] when below 12.
    pub fn bcrypt_cost(&self) -> Result<u32, SettingsError> {
        let cost = self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST);
        if cost < MIN_BCRYPT_COST {
            return Err(SettingsError::Invalid {
                name: "FLEET_BCRYPT_COST",
                reason: format!("{cost} is below the minimum of {MIN_BCRYPT_COST}"),
            });
        }
        Ok(cost)
    }

    /// Pool size, defaulting to 10.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Client request timeout, defaulting to 30 seconds.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing and validation.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 7] = [
        "FLEET_DATABASE_URL",
        "FLEET_JWT_SECRET",
        "FLEET_BIND_ADDR",
        "FLEET_BCRYPT_COST",
        "FLEET_DB_MAX_CONNECTIONS",
        "FLEET_REQUEST_TIMEOUT_SECS",
        "FLEET_RUN_MIGRATIONS",
    ];

    fn env_with(overrides: &[(&str, &str)]) -> [(&'static str, Option<String>); 7] {
        VARS.map(|name| {
            let value = overrides
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned());
            (name, value)
        })
    }

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("fleet-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(env_with(&[]));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.database_url(),
            Err(SettingsError::Missing {
                name: "FLEET_DATABASE_URL"
            })
        );
        assert!(settings.jwt_secret().is_err());
        assert_eq!(
            settings.bind_addr().expect("default address"),
            DEFAULT_BIND_ADDR.parse::<SocketAddr>().expect("literal")
        );
        assert_eq!(settings.bcrypt_cost(), Ok(12));
        assert_eq!(settings.db_max_connections(), 10);
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
        assert!(!settings.run_migrations);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env(env_with(&[
            ("FLEET_DATABASE_URL", "postgres://fleet@db/fleet"),
            ("FLEET_JWT_SECRET", "kessel-run"),
            ("FLEET_BIND_ADDR", "127.0.0.1:9000"),
            ("FLEET_BCRYPT_COST", "14"),
            ("FLEET_DB_MAX_CONNECTIONS", "3"),
            ("FLEET_REQUEST_TIMEOUT_SECS", "5"),
            ("FLEET_RUN_MIGRATIONS", "true"),
        ]));

        let settings = load_from_empty_args();
        assert_eq!(settings.database_url(), Ok("postgres://fleet@db/fleet"));
        assert_eq!(
            settings.jwt_secret().expect("secret").as_str(),
            "kessel-run"
        );
        assert_eq!(
            settings.bind_addr().expect("address").to_string(),
            "127.0.0.1:9000"
        );
        assert_eq!(settings.bcrypt_cost(), Ok(14));
        assert_eq!(settings.db_max_connections(), 3);
        assert_eq!(settings.request_timeout(), Duration::from_secs(5));
        assert!(settings.run_migrations);
    }

    #[rstest]
    #[case("4")]
    #[case("11")]
    fn weak_bcrypt_costs_are_rejected(#[case] cost: &str) {
        let _guard = lock_env(env_with(&[("FLEET_BCRYPT_COST", cost)]));

        let settings = load_from_empty_args();
        assert!(matches!(
            settings.bcrypt_cost(),
            Err(SettingsError::Invalid {
                name: "FLEET_BCRYPT_COST",
                ..
            })
        ));
    }

    #[rstest]
    fn malformed_bind_addresses_are_rejected() {
        let _guard = lock_env(env_with(&[("FLEET_BIND_ADDR", "not-an-address")]));

        let settings = load_from_empty_args();
        assert!(settings.bind_addr().is_err());
    }

    #[rstest]
    fn debug_output_hides_secrets() {
        let _guard = lock_env(env_with(&[
            ("FLEET_DATABASE_URL", "postgres://user:hunter2@db/fleet"),
            ("FLEET_JWT_SECRET", "kessel-run"),
        ]));

        let rendered = format!("{:?}", load_from_empty_args());
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("kessel-run"));
    }
}
