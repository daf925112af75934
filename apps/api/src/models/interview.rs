use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One generated question with the model's reference answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewRow {
    pub id: Uuid,
    pub user_id: String,
    pub position: String,
    pub description: String,
    pub experience: i32,
    pub tech_stack: String,
    pub interviewer_style: String,
    /// JSON array of `InterviewQuestion`.
    pub questions: Value,
    pub focus_areas: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Set when the questions were regenerated.
    pub updated_at: Option<DateTime<Utc>>,
}

impl InterviewRow {
    pub fn parsed_questions(&self) -> Vec<InterviewQuestion> {
        serde_json::from_value(self.questions.clone()).unwrap_or_default()
    }
}
