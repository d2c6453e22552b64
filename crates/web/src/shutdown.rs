//! Graceful shutdown on Ctrl+C or SIGTERM.

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownError {
    #[error("failed to install {signal} handler")]
    Install {
        signal: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Stop accepting connections once a shutdown signal arrives and let
/// in-flight requests finish.
pub(crate) async fn stop_on_signal(handle: ServerHandle) -> Result<(), ShutdownError> {
    let signal = wait_for_signal().await?;

    info!(signal, "shutting down");

    handle.stop_graceful(None);

    Ok(())
}

async fn wait_for_signal() -> Result<&'static str, ShutdownError> {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .map_err(|source| ShutdownError::Install {
                signal: "ctrl_c",
                source,
            })
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(|source| ShutdownError::Install {
                signal: "SIGTERM",
                source,
            })?
            .recv()
            .await;

        Ok::<(), ShutdownError>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<(), ShutdownError>>();

    tokio::select! {
        result = ctrl_c => result.map(|()| "ctrl_c"),
        result = terminate => result.map(|()| "SIGTERM"),
    }
}
