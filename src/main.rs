mod agent;
mod config;
mod errors;
mod models;
mod reference;
mod routes;
mod service;

use std::sync::Arc;

use tracing::{info, warn};

use crate::agent::CompletionGateway;
use crate::config::Config;
use crate::reference::ReferenceService;
use crate::routes::api_routes::AppState;
use crate::service::debate_service::DebateService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sophron=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env();

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let gateway = agent::configure(&config)
        .map(|g| Arc::new(g) as Arc<dyn CompletionGateway>);
    match &gateway {
        Ok(_) => info!("Completion gateway configured for model {}", agent::MODEL),
        Err(_) => warn!("OPENAI_API_KEY is not set; completion endpoints will answer 500"),
    }

    let http = reference::http_client()?;
    let state = AppState {
        debate: DebateService::new(gateway),
        reference: ReferenceService::from_config(&config, http),
    };

    // ── Router ────────────────────────────────────────────────────────────────
    let app = routes::app(state, config.static_dir.as_deref());

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}
