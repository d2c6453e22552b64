//! Carlot Web Server

use std::process;

use salvo::prelude::*;
use tracing::{error, info};

use carlot_app::context::AppContext;

use crate::{config::ServerConfig, router::app_router, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod cars;
mod config;
mod extensions;
mod healthcheck;
mod home;
mod observability;
mod pages;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Carlot Web Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "the subscriber failed to install, stderr is all that is left"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let app = match AppContext::open(config.storage.storage_paths()).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error:?}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!(
        %addr,
        data_file = %config.storage.data_file.display(),
        static_dir = %config.storage.static_dir.display(),
        "Starting server"
    );

    let router = app_router(
        State::from_app_context(app),
        &config.storage.static_dir,
        config.logging.slow_request_threshold(),
        config.storage.max_upload_bytes,
    );

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::stop_on_signal(handle).await {
            error!("failed to listen for shutdown signal: {error:?}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
