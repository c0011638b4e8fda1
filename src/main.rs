//! Interview coach - mock interview backend
//!
//! A stateless HTTP service that turns caller-supplied interview transcripts
//! into prompts for a hosted language model.

mod api;
mod config;
mod interview;
mod llm;

use api::{cors_layer, create_router, AppState};
use config::Config;
use interview::{Interviewer, TurnLimit};
use llm::{GeminiService, LlmService, LoggingService};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pick up a local .env before anything reads the environment
    let dotenv = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "interview_coach=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "Loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Failed to load environment file"),
    }

    // Configuration
    let config = Config::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;

    // External model client, constructed once and injected
    let gemini = GeminiService::new(
        config.api_key.clone(),
        &config.model,
        &config.base_url,
        config.request_timeout,
    )?;
    tracing::info!(
        model = %gemini.model_id(),
        endpoint = %gemini.endpoint(),
        max_turns = config.max_turns,
        "LLM client initialized"
    );
    let llm: Arc<dyn LlmService> = Arc::new(LoggingService::new(Arc::new(gemini)));

    // Create application state
    let interviewer = Interviewer::new(llm, TurnLimit::new(config.max_turns));
    let state = AppState::new(interviewer);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state)
        .layer(cors_layer(&config.cors_origins))
        .layer(compression)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.listen_addr;
    tracing::info!("Interview coach listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
