use anyhow::Context as _;
use tokio::net::TcpListener;

use layercake_service::{
    build_app,
    core::{config::Settings, logging::init_logging},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load().context("failed to load settings")?;
    init_logging(&settings.log_level, settings.log_format);

    let address = settings.address();
    tracing::info!(
        app = %settings.app_name,
        api_version = %settings.api_version,
        %address,
        "starting service"
    );

    let app = build_app(settings);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
