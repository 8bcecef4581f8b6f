// Connection handling module
// Serves one accepted TCP connection on the local task set

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use serde_json::Value;
use tokio::net::TcpStream;

use crate::config::AppState;
use crate::handler;

/// Serve a connection in a spawned local task.
///
/// The HTTP/1 connection honors `performance.keep_alive` and is cut off
/// once `performance.request_timeout` seconds have passed.
pub fn serve_connection(stream: TcpStream, peer_addr: SocketAddr, state: &Arc<AppState>) {
    let state = Arc::clone(state);
    state.logger.debug(
        "Connection accepted",
        &[("peer", Value::from(peer_addr.to_string()))],
    );

    tokio::task::spawn_local(async move {
        if let Err(e) = stream.set_nodelay(true) {
            state.logger.debug(
                "Failed to set TCP_NODELAY",
                &[("error", Value::from(e.to_string()))],
            );
        }
        let io = TokioIo::new(stream);
        let timeout = Duration::from_secs(state.config.performance.request_timeout.max(1));

        let mut builder = http1::Builder::new();
        builder.keep_alive(state.config.performance.keep_alive);

        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&service_state), peer_addr)),
        );

        match tokio::time::timeout(timeout, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => state.logger.debug(
                "Connection error",
                &[
                    ("peer", Value::from(peer_addr.to_string())),
                    ("error", Value::from(err.to_string())),
                ],
            ),
            Err(_) => state.logger.warn(
                "Connection timeout",
                &[
                    ("peer", Value::from(peer_addr.to_string())),
                    ("seconds", Value::from(timeout.as_secs())),
                ],
            ),
        }
    });
}
