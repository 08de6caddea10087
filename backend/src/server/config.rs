//! HTTP server configuration object and helpers.

use notes_backend::outbound::persistence::DbPool;
use std::net::SocketAddr;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) seed_demo_data: bool,
}

impl ServerConfig {
    /// Construct a configuration that binds to `bind_addr` and uses an empty
    /// in-memory store until a pool is attached.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            seed_demo_data: false,
        }
    }

    /// Attach a database connection pool.
    ///
    /// When provided, notes and users are read from and written to
    /// PostgreSQL instead of the in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Seed the in-memory store with the demo user and note.
    ///
    /// Ignored when a database pool is attached.
    #[must_use]
    pub fn with_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
