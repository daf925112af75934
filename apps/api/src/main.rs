use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mock_interview_api::config::Config;
use mock_interview_api::db::{create_pool, ensure_schema};
use mock_interview_api::focus::PgQuestionHistory;
use mock_interview_api::llm_client::{self, LlmClient};
use mock_interview_api::routes::build_router;
use mock_interview_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mock Interview API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone());
    info!(
        "LLM client initialized (model: {}, fallback: {})",
        llm_client::PRIMARY_MODEL,
        llm_client::FALLBACK_MODEL
    );

    // Question history for focus-area weighting
    let question_history = Arc::new(PgQuestionHistory::new(
        db.clone(),
        config.history_interview_limit,
    ));
    info!(
        "Focus areas: {} per interview, history window {} interviews",
        config.focus_area_count, config.history_interview_limit
    );

    // Build app state
    let state = AppState {
        db,
        llm,
        config: config.clone(),
        question_history,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the frontend origin once it has a fixed domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
