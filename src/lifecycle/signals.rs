//! OS signal handling.
//!
//! Ctrl+C (SIGINT) triggers graceful shutdown through the coordinator.

use crate::lifecycle::Shutdown;

/// Spawn a task that triggers `shutdown` on Ctrl+C.
pub fn trigger_on_ctrl_c(shutdown: Shutdown) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Ctrl+C received");
                shutdown.trigger();
            }
            Err(e) => tracing::error!(error = %e, "Failed to install Ctrl+C handler"),
        }
    })
}
