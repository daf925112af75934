//! Answer recorder: scores an answer and upserts it for (user, interview, question).

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::answers::evaluation::evaluate_answer;
use crate::confidence::{score_answer, AnswerMetrics, ConfidenceBreakdown};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::answer::UserAnswerRow;
use crate::models::interview::{InterviewQuestion, InterviewRow};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordAnswerRequest {
    pub user_id: String,
    pub question: String,
    /// BCP-47 code of the language the candidate answered in, e.g. "hi-IN".
    pub preferred_language: Option<String>,
    pub metrics: AnswerMetrics,
}

#[derive(Debug, Serialize)]
pub struct RecordAnswerResponse {
    pub answer: UserAnswerRow,
    pub confidence: ConfidenceBreakdown,
}

/// Reference answer for `question` within the interview, matched on trimmed text.
pub fn find_reference_answer<'a>(
    questions: &'a [InterviewQuestion],
    question: &str,
) -> Option<&'a InterviewQuestion> {
    let question = question.trim();
    questions.iter().find(|q| q.question.trim() == question)
}

pub async fn record_answer(
    db: &PgPool,
    llm: &LlmClient,
    interview_id: Uuid,
    request: RecordAnswerRequest,
) -> Result<RecordAnswerResponse, AppError> {
    let user_answer = request.metrics.text.trim();
    if user_answer.is_empty() {
        return Err(AppError::Validation("answer text cannot be empty".to_string()));
    }

    let interview = sqlx::query_as::<_, InterviewRow>(
        "SELECT * FROM interviews WHERE id = $1 AND user_id = $2",
    )
    .bind(interview_id)
    .bind(&request.user_id)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Interview {interview_id} not found")))?;

    let questions = interview.parsed_questions();
    let reference = find_reference_answer(&questions, &request.question).ok_or_else(|| {
        AppError::Validation(format!(
            "Question is not part of interview {interview_id}"
        ))
    })?;

    let confidence = score_answer(&request.metrics);

    let evaluation = evaluate_answer(
        llm,
        &reference.question,
        user_answer,
        &reference.answer,
        request.preferred_language.as_deref(),
    )
    .await;

    let answer = sqlx::query_as::<_, UserAnswerRow>(
        r#"
        INSERT INTO user_answers
            (user_id, interview_id, question, correct_ans, user_ans, feedback, rating,
             confidence_overall, confidence_text, confidence_speech, confidence_webcam)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        ON CONFLICT (user_id, interview_id, question) DO UPDATE SET
            user_ans = EXCLUDED.user_ans,
            feedback = EXCLUDED.feedback,
            rating = EXCLUDED.rating,
            confidence_overall = EXCLUDED.confidence_overall,
            confidence_text = EXCLUDED.confidence_text,
            confidence_speech = EXCLUDED.confidence_speech,
            confidence_webcam = EXCLUDED.confidence_webcam,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(&request.user_id)
    .bind(interview_id)
    .bind(&reference.question)
    .bind(&reference.answer)
    .bind(evaluation.answer_text(user_answer))
    .bind(&evaluation.feedback)
    .bind(evaluation.ratings)
    .bind(confidence.overall as i32)
    .bind(confidence.text_score as i32)
    .bind(confidence.speech_score as i32)
    .bind(confidence.webcam_score as i32)
    .fetch_one(db)
    .await?;

    info!(
        "Recorded answer {} for interview {}: rating={}, confidence={}",
        answer.id, interview_id, answer.rating, confidence.overall
    );

    Ok(RecordAnswerResponse { answer, confidence })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<InterviewQuestion> {
        vec![
            InterviewQuestion {
                question: "What is a mutex?".to_string(),
                answer: "A mutual exclusion lock.".to_string(),
            },
            InterviewQuestion {
                question: "Explain CAP.".to_string(),
                answer: "Consistency, availability, partition tolerance.".to_string(),
            },
        ]
    }

    #[test]
    fn test_reference_answer_matches_trimmed_question() {
        let qs = questions();
        let found = find_reference_answer(&qs, "  Explain CAP.\n").unwrap();
        assert_eq!(found.answer, "Consistency, availability, partition tolerance.");
    }

    #[test]
    fn test_unknown_question_has_no_reference() {
        assert!(find_reference_answer(&questions(), "What is Raft?").is_none());
    }

    #[test]
    fn test_request_deserializes_nested_metrics() {
        let request: RecordAnswerRequest = serde_json::from_str(
            r#"{
                "user_id": "user_1",
                "question": "What is a mutex?",
                "preferred_language": null,
                "metrics": {
                    "text": "A lock that only one thread holds at a time.",
                    "recording_duration_seconds": 5.0,
                    "webcam_instability": 12.0,
                    "webcam_active": true
                }
            }"#,
        )
        .unwrap();
        assert!(request.metrics.webcam_active);
        assert_eq!(request.metrics.recording_duration_seconds, 5.0);
    }
}
