//! Interview Generator: builds a focus-biased prompt and stores the generated questions.
//!
//! Creating and regenerating share one pipeline; regeneration replaces the questions
//! in place and discards answers given to the old ones.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::focus::{
    focus_area_instructions, previous_question_texts_or_empty, select_focus_areas,
    QuestionHistory,
};
use crate::interview::prompts::{
    DEFAULT_INTERVIEWER_STYLE, INTERVIEWER_ROLE, QUESTION_COUNT, QUESTION_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::json_system;
use crate::llm_client::LlmClient;
use crate::models::interview::{InterviewQuestion, InterviewRow};

fn default_interviewer_style() -> String {
    DEFAULT_INTERVIEWER_STYLE.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateInterviewRequest {
    pub user_id: String,
    pub position: String,
    pub description: String,
    pub experience: i32,
    pub tech_stack: String,
    /// Free-form tone, e.g. "Friendly" or "Strict".
    #[serde(default = "default_interviewer_style")]
    pub interviewer_style: String,
}

impl GenerateInterviewRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.user_id.trim().is_empty() {
            return Err(AppError::Validation("user_id cannot be empty".to_string()));
        }
        if self.position.trim().is_empty() {
            return Err(AppError::Validation("position cannot be empty".to_string()));
        }
        if self.tech_stack.trim().is_empty() {
            return Err(AppError::Validation("tech_stack cannot be empty".to_string()));
        }
        if self.interviewer_style.trim().is_empty() {
            return Err(AppError::Validation(
                "interviewer_style cannot be empty".to_string(),
            ));
        }
        if self.experience < 0 {
            return Err(AppError::Validation(
                "experience cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Profile prompt followed by the focus-area block (omitted when no areas were selected).
pub fn build_question_prompt(request: &GenerateInterviewRequest, focus_areas: &[String]) -> String {
    let profile = QUESTION_PROMPT_TEMPLATE
        .replace("{position}", request.position.trim())
        .replace("{description}", request.description.trim())
        .replace("{experience}", &request.experience.to_string())
        .replace("{tech_stack}", request.tech_stack.trim())
        .replace("{interviewer_style}", request.interviewer_style.trim())
        .replace("{question_count}", &QUESTION_COUNT.to_string());

    profile + &focus_area_instructions(focus_areas)
}

/// Questions plus the focus areas that shaped them.
struct GeneratedQuestions {
    questions: Vec<InterviewQuestion>,
    focus_areas: Vec<String>,
}

/// history → focus areas → prompt → LLM. Nothing is written.
async fn generate_questions(
    llm: &LlmClient,
    history: &dyn QuestionHistory,
    request: &GenerateInterviewRequest,
    focus_area_count: usize,
) -> Result<GeneratedQuestions, AppError> {
    let previous = previous_question_texts_or_empty(history, &request.user_id).await;
    let focus_areas = select_focus_areas(&previous, focus_area_count);
    info!(
        "Generating interview for {} ({} prior questions), focus areas: {:?}",
        request.user_id,
        previous.len(),
        focus_areas
    );

    let prompt = build_question_prompt(request, &focus_areas);
    let questions: Vec<InterviewQuestion> = llm
        .call_json(&prompt, &json_system(INTERVIEWER_ROLE))
        .await
        .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))?;

    if questions.is_empty() {
        return Err(AppError::Llm(
            "Question generation returned no questions".to_string(),
        ));
    }

    Ok(GeneratedQuestions {
        questions,
        focus_areas,
    })
}

/// Full generation pipeline for one interview.
pub async fn generate_interview(
    db: &PgPool,
    llm: &LlmClient,
    history: &dyn QuestionHistory,
    request: GenerateInterviewRequest,
    focus_area_count: usize,
) -> Result<InterviewRow, AppError> {
    request.validate()?;

    let generated = generate_questions(llm, history, &request, focus_area_count).await?;
    let questions_json =
        serde_json::to_value(&generated.questions).map_err(anyhow::Error::from)?;

    let interview = sqlx::query_as::<_, InterviewRow>(
        r#"
        INSERT INTO interviews
            (user_id, position, description, experience, tech_stack, interviewer_style,
             questions, focus_areas)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(&request.user_id)
    .bind(request.position.trim())
    .bind(request.description.trim())
    .bind(request.experience)
    .bind(request.tech_stack.trim())
    .bind(request.interviewer_style.trim())
    .bind(&questions_json)
    .bind(&generated.focus_areas)
    .fetch_one(db)
    .await?;

    info!(
        "Stored interview {} with {} questions",
        interview.id,
        generated.questions.len()
    );
    Ok(interview)
}

/// Reruns the pipeline for an existing interview with an edited profile.
/// The candidate's answers to the previous questions are deleted in the same transaction.
pub async fn regenerate_interview(
    db: &PgPool,
    llm: &LlmClient,
    history: &dyn QuestionHistory,
    interview_id: Uuid,
    request: GenerateInterviewRequest,
    focus_area_count: usize,
) -> Result<InterviewRow, AppError> {
    request.validate()?;

    let exists: Option<Uuid> =
        sqlx::query_scalar("SELECT id FROM interviews WHERE id = $1 AND user_id = $2")
            .bind(interview_id)
            .bind(&request.user_id)
            .fetch_optional(db)
            .await?;
    if exists.is_none() {
        return Err(AppError::NotFound(format!(
            "Interview {interview_id} not found"
        )));
    }

    let generated = generate_questions(llm, history, &request, focus_area_count).await?;
    let questions_json =
        serde_json::to_value(&generated.questions).map_err(anyhow::Error::from)?;

    let mut tx = db.begin().await?;

    let cleared = sqlx::query("DELETE FROM user_answers WHERE interview_id = $1 AND user_id = $2")
        .bind(interview_id)
        .bind(&request.user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let interview = sqlx::query_as::<_, InterviewRow>(
        r#"
        UPDATE interviews SET
            position = $3,
            description = $4,
            experience = $5,
            tech_stack = $6,
            interviewer_style = $7,
            questions = $8,
            focus_areas = $9,
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(interview_id)
    .bind(&request.user_id)
    .bind(request.position.trim())
    .bind(request.description.trim())
    .bind(request.experience)
    .bind(request.tech_stack.trim())
    .bind(request.interviewer_style.trim())
    .bind(&questions_json)
    .bind(&generated.focus_areas)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Interview {interview_id} not found")))?;

    tx.commit().await?;

    info!(
        "Regenerated interview {} with {} questions, cleared {} old answers",
        interview.id,
        generated.questions.len(),
        cleared
    );
    Ok(interview)
}

/// The candidate's interviews, newest first.
pub async fn list_interviews(db: &PgPool, user_id: &str) -> Result<Vec<InterviewRow>, AppError> {
    if user_id.trim().is_empty() {
        return Err(AppError::Validation("user_id cannot be empty".to_string()));
    }

    let interviews = sqlx::query_as::<_, InterviewRow>(
        "SELECT * FROM interviews WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(interviews)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateInterviewRequest {
        GenerateInterviewRequest {
            user_id: "user_2abc".to_string(),
            position: "Backend Engineer".to_string(),
            description: "Build payment APIs".to_string(),
            experience: 4,
            tech_stack: "Rust, PostgreSQL, Kafka".to_string(),
            interviewer_style: "Strict".to_string(),
        }
    }

    #[test]
    fn test_prompt_contains_profile() {
        let prompt = build_question_prompt(&request(), &[]);
        assert!(prompt.contains("Job Position: Backend Engineer"));
        assert!(prompt.contains("Years of Experience: 4"));
        assert!(prompt.contains("Tech Stack: Rust, PostgreSQL, Kafka"));
        assert!(prompt.contains("Interviewer Style: Strict"));
        assert!(prompt.contains("Reflect the selected Interviewer Style (Strict)"));
        assert!(!prompt.contains("{interviewer_style}"));
        assert!(prompt.contains("exactly 5 interview questions"));
        assert!(!prompt.contains("{position}"));
        assert!(!prompt.contains("{question_count}"));
    }

    #[test]
    fn test_prompt_without_focus_areas_has_no_focus_block() {
        let prompt = build_question_prompt(&request(), &[]);
        assert!(!prompt.contains("FOCUS AREAS"));
    }

    #[test]
    fn test_prompt_appends_focus_areas_last() {
        let areas = vec!["Concurrency".to_string(), "Security".to_string()];
        let prompt = build_question_prompt(&request(), &areas);
        let schema = prompt.find(r#""question""#).unwrap();
        let focus = prompt.find("FOCUS AREAS").unwrap();
        assert!(schema < focus);
        assert!(prompt.contains("- Concurrency\n- Security"));
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut r = request();
        r.position = "   ".to_string();
        assert!(matches!(r.validate(), Err(AppError::Validation(_))));

        let mut r = request();
        r.tech_stack = String::new();
        assert!(matches!(r.validate(), Err(AppError::Validation(_))));

        let mut r = request();
        r.user_id = String::new();
        assert!(matches!(r.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_negative_experience() {
        let mut r = request();
        r.experience = -1;
        assert!(matches!(r.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_interviewer_style_defaults_to_neutral() {
        let request: GenerateInterviewRequest = serde_json::from_str(
            r#"{
                "user_id": "user_2abc",
                "position": "SRE",
                "description": "On-call for payments",
                "experience": 2,
                "tech_stack": "Go, Kubernetes"
            }"#,
        )
        .unwrap();
        assert_eq!(request.interviewer_style, "Neutral");
        assert!(build_question_prompt(&request, &[]).contains("Interviewer Style: Neutral"));
    }

    #[test]
    fn test_validate_rejects_blank_interviewer_style() {
        let mut r = request();
        r.interviewer_style = "  ".to_string();
        assert!(matches!(r.validate(), Err(AppError::Validation(_))));
    }
}
