use anyhow::Result;
use tracing::{info, warn};

use briefing_core::{AppConfig, BriefingService};
use briefing_web::AppState;

pub async fn run(config: &AppConfig) -> Result<()> {
    if config.ai.openai_api_key.is_none() {
        warn!("No OpenAI API key configured; summaries will fail until OPENAI_API_KEY is set");
    }

    let state = AppState::new(BriefingService::new(config)?);
    briefing_web::serve(state, &config.bind_address(), shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
