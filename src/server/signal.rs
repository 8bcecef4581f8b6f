// Signal handling module
//
// SIGINT (Ctrl+C) and SIGTERM both request a graceful shutdown: the accept
// loop stops taking new connections and the process exits.

/// Resolve once a shutdown signal arrives, yielding its name
///
/// A signal whose handler cannot be installed is ignored rather than treated
/// as a shutdown request.
#[cfg(unix)]
pub async fn shutdown_signal() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => sigterm.recv().await,
            Err(_) => std::future::pending().await,
        }
    };

    tokio::select! {
        Ok(()) = tokio::signal::ctrl_c() => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}

/// Non-Unix fallback: only Ctrl+C is supported
#[cfg(not(unix))]
pub async fn shutdown_signal() -> &'static str {
    match tokio::signal::ctrl_c().await {
        Ok(()) => "Ctrl+C",
        Err(_) => std::future::pending().await,
    }
}
