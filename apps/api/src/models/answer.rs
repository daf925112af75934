use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::confidence::ConfidenceBreakdown;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserAnswerRow {
    pub id: Uuid,
    pub user_id: String,
    pub interview_id: Uuid,
    pub question: String,
    pub correct_ans: String,
    pub user_ans: String,
    pub feedback: String,
    pub rating: i32,
    pub confidence_overall: Option<i32>,
    pub confidence_text: Option<i32>,
    pub confidence_speech: Option<i32>,
    pub confidence_webcam: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAnswerRow {
    /// The stored breakdown, if all four columns are present.
    pub fn confidence(&self) -> Option<ConfidenceBreakdown> {
        Some(ConfidenceBreakdown {
            overall: u32::try_from(self.confidence_overall?).ok()?,
            text_score: u32::try_from(self.confidence_text?).ok()?,
            speech_score: u32::try_from(self.confidence_speech?).ok()?,
            webcam_score: u32::try_from(self.confidence_webcam?).ok()?,
        })
    }
}
