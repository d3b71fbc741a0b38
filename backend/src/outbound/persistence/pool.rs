//! bb8 pool of `diesel-async` PostgreSQL connections.
//!
//! Repositories hold a cloned [`DbPool`] and check out one connection per
//! operation. Dropping an operation's future returns the connection; an
//! open transaction on it is rolled back before reuse.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

const DEFAULT_MAX_SIZE: u32 = 10;
const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors raised while building or using the pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available in time, or connecting failed.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// The pool could not be constructed.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    pub(crate) fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    pub(crate) fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Pool sizing and checkout policy.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use fleet_backend::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://fleet@localhost/fleet")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(2));
/// assert_eq!(config.max_size(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Configuration with default sizing for `database_url`.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_SIZE,
            min_idle: None,
            connection_timeout: DEFAULT_CHECKOUT_TIMEOUT,
        }
    }

    /// Upper bound on open connections. Zero is raised to one.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size.max(1);
        self
    }

    /// Connections kept warm while idle.
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// How long a checkout may wait before failing.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Target database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Configured maximum pool size.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }
}

/// Cloneable handle to the shared connection pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build the pool. Connections are opened lazily unless `min_idle` is set.
    ///
    /// # Errors
    /// Returns [`PoolError::Build`] when the pool cannot be constructed.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url);

        let inner = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .test_on_check_out(true)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner })
    }

    /// Check out a connection.
    ///
    /// # Errors
    /// Returns [`PoolError::Checkout`] if none is available within the
    /// configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_are_conservative() {
        let config = PoolConfig::new("postgres://localhost/fleet");

        assert_eq!(config.database_url(), "postgres://localhost/fleet");
        assert_eq!(config.max_size(), DEFAULT_MAX_SIZE);
        assert_eq!(config.min_idle, None);
        assert_eq!(config.connection_timeout, DEFAULT_CHECKOUT_TIMEOUT);
    }

    #[rstest]
    fn zero_max_size_is_raised_to_one() {
        let config = PoolConfig::new("postgres://localhost/fleet").with_max_size(0);
        assert_eq!(config.max_size(), 1);
    }

    #[rstest]
    fn errors_carry_the_cause() {
        assert!(
            PoolError::checkout("timed out")
                .to_string()
                .ends_with("timed out")
        );
        assert!(
            PoolError::build("bad url")
                .to_string()
                .starts_with("failed to build")
        );
    }
}
