use copilot_server::{start_server, AppState, ConfigError, ServerConfig, ServerError};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Server(#[from] ServerError),
}

#[tokio::main]
async fn main() {
    // Initialize logging - RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("Mini Copilot starting...");

    if let Err(e) = run().await {
        log::error!("Startup failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env().await?;
    let catalog = config.load_catalog().await?;
    let state = AppState::from_config(&config, catalog);

    let (addr, handle) = start_server(&config.bind_addr(), state).await?;
    log::info!(
        "Listening on http://{} (response delay {} ms)",
        addr,
        config.response_delay_ms
    );

    tokio::select! {
        _ = tokio::signal::ctrl_c() => log::info!("Shutting down"),
        result = handle => {
            if let Err(e) = result {
                log::error!("Server task failed: {}", e);
            }
        }
    }

    Ok(())
}
