use std::sync::Arc;

use dish_finder::{
    api::{create_router, AppState},
    config::Config,
    services::{GeminiGateway, ModelGateway},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dish_finder=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    if config.gemini_api_key.trim().is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; every suggestion and recipe request will fail");
    }

    let gateway = GeminiGateway::new(
        config.gemini_api_key.clone(),
        config.gemini_api_url.clone(),
        config.gemini_model.clone(),
        config.oracle_timeout(),
    )?;

    tracing::info!(
        gateway = gateway.name(),
        model = %gateway.model(),
        timeout_secs = config.oracle_timeout_secs,
        static_dir = %config.static_dir,
        "Model gateway configured"
    );

    let state = AppState::new(Arc::new(gateway), config.static_dir.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server is running at http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
