//! HTTP server configuration object.

use std::net::SocketAddr;
use std::time::Duration;

use fleet_backend::outbound::persistence::DbPool;
use zeroize::Zeroizing;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_BCRYPT_COST: u32 = 12;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) request_timeout: Duration,
    pub(crate) db_pool: DbPool,
    pub(crate) bcrypt_cost: u32,
    pub(crate) jwt_secret: Zeroizing<String>,
}

impl ServerConfig {
    /// Configuration with default timeout and hashing cost.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool, jwt_secret: Zeroizing<String>) -> Self {
        Self {
            bind_addr,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            db_pool,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            jwt_secret,
        }
    }

    /// Client request timeout applied by the listener.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// bcrypt work factor for new password hashes.
    #[must_use]
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
