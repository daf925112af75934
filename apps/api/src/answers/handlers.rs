//! Axum route handlers for answers, confidence scoring and feedback.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::answers::recorder::{record_answer, RecordAnswerRequest, RecordAnswerResponse};
use crate::answers::summary::{summarize_feedback, FeedbackSummary};
use crate::confidence::{score_answer, AnswerMetrics, ConfidenceBreakdown};
use crate::errors::AppError;
use crate::interview::handlers::UserIdQuery;
use crate::models::answer::UserAnswerRow;
use crate::state::AppState;

/// POST /api/v1/confidence/score
///
/// Stateless scoring of one answer attempt. Nothing is stored.
pub async fn handle_score_confidence(Json(metrics): Json<AnswerMetrics>) -> Json<ConfidenceBreakdown> {
    Json(score_answer(&metrics))
}

/// POST /api/v1/interviews/:id/answers
///
/// Scores, evaluates and stores an answer. Re-answering a question replaces the previous answer.
pub async fn handle_record_answer(
    State(state): State<AppState>,
    Path(interview_id): Path<Uuid>,
    Json(request): Json<RecordAnswerRequest>,
) -> Result<Json<RecordAnswerResponse>, AppError> {
    let response = record_answer(&state.db, &state.llm, interview_id, request).await?;
    Ok(Json(response))
}

/// GET /api/v1/interviews/:id/feedback?user_id=
pub async fn handle_feedback(
    State(state): State<AppState>,
    Path(interview_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<FeedbackSummary>, AppError> {
    let answers = sqlx::query_as::<_, UserAnswerRow>(
        "SELECT * FROM user_answers WHERE interview_id = $1 AND user_id = $2 ORDER BY created_at",
    )
    .bind(interview_id)
    .bind(&params.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(summarize_feedback(answers)))
}
