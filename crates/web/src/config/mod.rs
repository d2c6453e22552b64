//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{logging::LoggingConfig, server::ServerRuntimeConfig, storage::StorageConfig};

pub(crate) mod logging;
pub(crate) mod server;
pub(crate) mod storage;

pub(crate) use logging::LogFormat;

/// Carlot web server configuration
#[derive(Debug, Parser)]
#[command(name = "carlot-web", about = "Carlot car catalog web server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Catalog file and static directory locations.
    #[command(flatten)]
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }
}
