pub mod api; // HTTP surface: router, handlers, server lifecycle
pub mod config;
pub mod pipeline;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::ServiceSettings;
use crate::pipeline::generation::{GroqClient, TriageService};

/// Process entry point: logging, settings, model client, HTTP server.
///
/// Returns once the server has shut down after Ctrl-C.
pub fn run() -> Result<(), String> {
    // Load .env before anything reads the environment
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    let settings = ServiceSettings::from_env();
    if settings.api_key.is_none() {
        tracing::warn!("GROQ_API_KEY is not set; model requests will fail until it is configured");
    }

    // Built outside the async runtime: the blocking HTTP client owns its own.
    let client = GroqClient::new(
        &settings.api_base,
        settings.api_key.clone(),
        settings.request_timeout_secs,
    )
    .map_err(|e| e.to_string())?;
    let service = Arc::new(TriageService::new(Arc::new(client), settings.models.clone()));

    tracing::info!(
        text_model = %settings.models.text,
        vision_model = %settings.models.vision,
        "Model selection"
    );

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;

    runtime.block_on(async {
        let server = api::start_api_server(service.clone(), &settings.bind_addr()).await?;
        tracing::info!(addr = %server.addr, "Listening");

        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {e}");
        }
        server.shutdown().await;
        Ok::<(), String>(())
    })?;

    drop(runtime);
    tracing::info!("{} stopped", config::APP_NAME);
    Ok(())
}
