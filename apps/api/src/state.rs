use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::focus::QuestionHistory;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    pub config: Config,
    /// Source of previously asked questions for focus-area weighting. Default: PgQuestionHistory.
    pub question_history: Arc<dyn QuestionHistory>,
}
