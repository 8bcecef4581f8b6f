// Server loop module
// Accepts connections until a shutdown signal arrives

use std::sync::Arc;

use serde_json::Value;
use tokio::net::TcpListener;

use super::connection::serve_connection;
use super::signal::shutdown_signal;
use crate::config::AppState;

/// Run the accept loop on the current `LocalSet`
///
/// Accept failures are logged and the loop carries on. Returns once SIGINT
/// or SIGTERM is received.
pub async fn run(listener: TcpListener, state: Arc<AppState>) {
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => serve_connection(stream, peer_addr, &state),
                    Err(e) => state.logger.error(
                        "Failed to accept connection",
                        &[("error", Value::from(e.to_string()))],
                    ),
                }
            }

            signal = &mut shutdown => {
                state.logger.info(
                    "Shutdown signal received, closing server",
                    &[("signal", Value::from(signal))],
                );
                break;
            }
        }
    }
}
