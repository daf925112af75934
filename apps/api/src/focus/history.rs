//! Question history: read-only lookup of the questions a candidate was recently asked.
//!
//! `AppState` holds an `Arc<dyn QuestionHistory>`; PostgreSQL in production, in-memory in tests.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::{debug, warn};

/// Number of most recent interviews consulted when no limit is configured.
pub const DEFAULT_HISTORY_INTERVIEW_LIMIT: i64 = 3;

#[async_trait]
pub trait QuestionHistory: Send + Sync {
    /// Flattened question texts from the candidate's most recent interviews.
    /// Order carries no meaning for focus-area weighting.
    async fn previous_question_texts(&self, user_id: &str) -> Result<Vec<String>>;
}

/// Reads `interviews.questions` (a JSON array of `{question, answer}`) for a candidate.
pub struct PgQuestionHistory {
    pool: PgPool,
    interview_limit: i64,
}

impl PgQuestionHistory {
    pub fn new(pool: PgPool, interview_limit: i64) -> Self {
        Self {
            pool,
            interview_limit,
        }
    }
}

#[async_trait]
impl QuestionHistory for PgQuestionHistory {
    async fn previous_question_texts(&self, user_id: &str) -> Result<Vec<String>> {
        if user_id.is_empty() {
            return Ok(vec![]);
        }

        let documents: Vec<Value> = sqlx::query_scalar(
            "SELECT questions FROM interviews WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(self.interview_limit)
        .fetch_all(&self.pool)
        .await?;

        let texts = flatten_question_texts(&documents);
        debug!(
            user_id,
            interviews = documents.len(),
            questions = texts.len(),
            "Loaded question history"
        );
        Ok(texts)
    }
}

/// Pulls every `question` string out of a list of interview `questions` documents.
/// Malformed documents and entries are skipped.
pub fn flatten_question_texts(documents: &[Value]) -> Vec<String> {
    documents
        .iter()
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(|qa| qa.get("question").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

/// Fetches history for the selector. A failed lookup degrades to an empty history,
/// which leaves every topic at its base weight.
pub async fn previous_question_texts_or_empty(
    history: &dyn QuestionHistory,
    user_id: &str,
) -> Vec<String> {
    match history.previous_question_texts(user_id).await {
        Ok(texts) => texts,
        Err(e) => {
            warn!("Failed to fetch question history for {user_id}, using unbiased topics: {e:#}");
            vec![]
        }
    }
}
