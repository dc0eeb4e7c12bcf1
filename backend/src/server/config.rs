//! HTTP server configuration object.

use std::net::SocketAddr;

use area_calculator::inbound::http::cors::allowed_origins;
use area_calculator::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) allowed_origins: Vec<String>,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Configuration serving `db_pool` on `bind_addr` with the default
    /// CORS origins.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            allowed_origins: allowed_origins(std::iter::empty::<&str>()),
            db_pool,
        }
    }

    /// Allow `extra` origins in addition to the defaults.
    #[must_use]
    pub fn with_extra_origins<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_origins = allowed_origins(extra);
        self
    }
}
