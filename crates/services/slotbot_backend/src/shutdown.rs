// --- File: crates/services/slotbot_backend/src/shutdown.rs ---
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};

/// Time in-flight requests get to finish once a shutdown signal arrived.
pub const GRACE_PERIOD: Duration = Duration::from_secs(30);

/// Resolves on SIGINT or SIGTERM (Ctrl+C only on non-Unix targets).
///
/// Once resolved, a watchdog exits the process if draining takes longer than
/// `grace`. The watchdog dies with the runtime on a clean shutdown.
pub async fn shutdown_signal(grace: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }

    tokio::spawn(async move {
        tokio::time::sleep(grace).await;
        warn!("Requests still running after {:?}, forcing exit", grace);
        std::process::exit(1);
    });
}
