use std::sync::Arc;

mod config;
mod contact;
mod content;
mod error;
mod handler;
mod http;
mod logger;
mod server;
mod views;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    // Single-threaded runtime: connections are spawned onto a LocalSet
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let logger = logger::Logger::new(&cfg.logging, cfg.app.environment)?;
    let listener = server::create_listener(addr)?;

    logger.log_server_start(&addr, &cfg.http.server_name);
    let state = Arc::new(config::AppState::new(cfg, logger));

    let local = tokio::task::LocalSet::new();
    local.run_until(server::run(listener, Arc::clone(&state))).await;

    state.logger.info("Server stopped", &[]);
    Ok(())
}
