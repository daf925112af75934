//! Axum route handlers for the Interview API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::focus::{previous_question_texts_or_empty, select_focus_areas, TOPICS};
use crate::interview::generator::{
    generate_interview, list_interviews, regenerate_interview, GenerateInterviewRequest,
};
use crate::models::interview::{InterviewQuestion, InterviewRow};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct InterviewResponse {
    pub interview: InterviewRow,
    pub questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct FocusAreasRequest {
    pub user_id: Option<String>,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct FocusAreasResponse {
    pub focus_areas: Vec<String>,
    pub history_size: usize,
}

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: String,
}

impl From<InterviewRow> for InterviewResponse {
    fn from(interview: InterviewRow) -> Self {
        let questions = interview.parsed_questions();
        Self {
            interview,
            questions,
        }
    }
}

/// Rejects counts the selector cannot satisfy before they reach it.
pub fn validate_focus_area_count(count: usize) -> Result<usize, AppError> {
    if count > TOPICS.len() {
        return Err(AppError::Validation(format!(
            "count must be at most {}",
            TOPICS.len()
        )));
    }
    Ok(count)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interviews
///
/// Generates and stores a new interview, biased away from the candidate's recent topics.
pub async fn handle_create_interview(
    State(state): State<AppState>,
    Json(request): Json<GenerateInterviewRequest>,
) -> Result<(StatusCode, Json<InterviewResponse>), AppError> {
    let interview = generate_interview(
        &state.db,
        &state.llm,
        state.question_history.as_ref(),
        request,
        state.config.focus_area_count,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(interview.into())))
}

/// GET /api/v1/interviews/:id?user_id=
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(interview_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<InterviewResponse>, AppError> {
    let interview = sqlx::query_as::<_, InterviewRow>(
        "SELECT * FROM interviews WHERE id = $1 AND user_id = $2",
    )
    .bind(interview_id)
    .bind(&params.user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Interview {interview_id} not found")))?;

    Ok(Json(interview.into()))
}

/// GET /api/v1/interviews?user_id=
pub async fn handle_list_interviews(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<InterviewResponse>>, AppError> {
    let interviews = list_interviews(&state.db, &params.user_id).await?;
    Ok(Json(interviews.into_iter().map(InterviewResponse::from).collect()))
}

/// PUT /api/v1/interviews/:id
///
/// Regenerates the questions from an edited profile. Answers to the old questions are removed.
pub async fn handle_update_interview(
    State(state): State<AppState>,
    Path(interview_id): Path<Uuid>,
    Json(request): Json<GenerateInterviewRequest>,
) -> Result<Json<InterviewResponse>, AppError> {
    let interview = regenerate_interview(
        &state.db,
        &state.llm,
        state.question_history.as_ref(),
        interview_id,
        request,
        state.config.focus_area_count,
    )
    .await?;

    Ok(Json(interview.into()))
}

/// POST /api/v1/focus-areas
///
/// Previews the focus areas the next interview would use. Without a user id
/// (or when the history lookup fails) every topic is equally likely.
pub async fn handle_focus_areas(
    State(state): State<AppState>,
    Json(request): Json<FocusAreasRequest>,
) -> Result<Json<FocusAreasResponse>, AppError> {
    let count = validate_focus_area_count(request.count.unwrap_or(state.config.focus_area_count))?;

    let history = match request.user_id.as_deref() {
        Some(user_id) if !user_id.trim().is_empty() => {
            previous_question_texts_or_empty(state.question_history.as_ref(), user_id).await
        }
        _ => vec![],
    };

    let focus_areas = select_focus_areas(&history, count);

    Ok(Json(FocusAreasResponse {
        focus_areas,
        history_size: history.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_area_count_limits() {
        assert_eq!(validate_focus_area_count(0).unwrap(), 0);
        assert_eq!(validate_focus_area_count(TOPICS.len()).unwrap(), TOPICS.len());
        assert!(matches!(
            validate_focus_area_count(TOPICS.len() + 1),
            Err(AppError::Validation(_))
        ));
    }
}
