use clap::Parser;
use payload_gateway::api;
use payload_gateway::utils::cli::{Args, validate_config};
use payload_gateway::utils::state::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = match validate_config(&args) {
        Ok(config) => config,
        Err(validation_errors) => {
            eprintln!("{}", validation_errors.join("\n"));
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "starting payload gateway");

    let listen_addr = config.listen_addr();
    // A store that cannot be reached is fatal: nothing is served.
    let state = Arc::new(AppState::new(config).await?);

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
