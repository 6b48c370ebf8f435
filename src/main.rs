use std::sync::Arc;
use tokio::sync::Notify;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::ServerConfig::from_args(std::env::args().skip(1))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr();

    let listener = match server::create_listener(addr) {
        Ok(listener) => listener,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to bind {addr}: {e} (is port {} already in use?)",
                addr.port()
            ));
            return Err(e.into());
        }
    };

    let shutdown = Arc::new(Notify::new());
    server::signal::start_signal_handler(Arc::clone(&shutdown));

    logger::log_server_start(&addr, &cfg);

    server::run(listener, Arc::new(cfg), &shutdown).await;

    logger::log_server_stop();
    Ok(())
}
