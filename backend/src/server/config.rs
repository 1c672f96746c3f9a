//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::path::PathBuf;

use fitlog_backend::outbound::persistence::DbPool;

/// Default listen port when `FITLOG_PORT` is not set.
const DEFAULT_PORT: u16 = 3000;

/// Default directory for the landing page and static assets.
const DEFAULT_PUBLIC_DIR: &str = "public";

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) public_dir: PathBuf,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration from explicit settings.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, public_dir: PathBuf) -> Self {
        Self {
            bind_addr,
            public_dir,
            db_pool: None,
        }
    }

    /// Read settings from the environment: `FITLOG_PORT` (default 3000) and
    /// `FITLOG_PUBLIC_DIR` (default `public`).
    pub fn from_env() -> std::io::Result<Self> {
        let port = match std::env::var("FITLOG_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| std::io::Error::other(format!("invalid FITLOG_PORT '{raw}': {e}")))?,
            Err(_) => DEFAULT_PORT,
        };
        let public_dir = std::env::var("FITLOG_PUBLIC_DIR")
            .map_or_else(|_| PathBuf::from(DEFAULT_PUBLIC_DIR), PathBuf::from);

        Ok(Self::new(
            SocketAddr::from(([0, 0, 0, 0], port)),
            public_dir,
        ))
    }

    /// Attach a database connection pool for the persistence adapter.
    ///
    /// Without a pool the server falls back to the in-memory repository.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
