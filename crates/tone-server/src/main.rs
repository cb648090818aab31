use std::error::Error;

use tone_server::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()?;
    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    log::info!("tone field server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, tone_server::router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("tone field server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("failed to install Ctrl-C handler: {err}");
        std::future::pending::<()>().await;
    }
}
