use env_logger::Env;
use log::{error, info};
use tokio::net::TcpListener;

use practice_api::{config::ServerConfig, routes::api, storage::Storage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    let storage = config.storage();
    info!("starting with {} entries", storage.key_count());

    let app = api::router(storage);
    let listener = TcpListener::bind(config.addr()).await?;

    info!("API started on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API stopped, entries discarded");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
}
