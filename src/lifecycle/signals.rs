//! OS signal handling.

use tokio::sync::broadcast;

/// Resolves on Ctrl+C or when `stop` fires (or its sender is dropped).
pub async fn shutdown_signal(mut stop: broadcast::Receiver<()>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            // Only an explicit stop can end the server now.
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutdown signal received"),
        _ = stop.recv() => tracing::info!("Shutdown requested"),
    }
}
