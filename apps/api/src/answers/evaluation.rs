//! Answer evaluation: LLM rating and feedback for a single answer.
//!
//! Evaluation never fails the request: if the LLM call or its JSON is unusable the
//! answer is stored with a zero rating and a placeholder message.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::answers::prompts::{EVALUATION_PROMPT_TEMPLATE, EVALUATOR_ROLE};
use crate::llm_client::prompts::json_system;
use crate::llm_client::LlmClient;

pub const FALLBACK_FEEDBACK: &str = "Unable to generate feedback";
pub const MAX_RATING: i32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerEvaluation {
    pub ratings: i32,
    pub feedback: String,
    #[serde(default)]
    pub translated_answer: Option<String>,
}

impl AnswerEvaluation {
    pub fn fallback(user_answer: &str) -> Self {
        Self {
            ratings: 0,
            feedback: FALLBACK_FEEDBACK.to_string(),
            translated_answer: Some(user_answer.to_string()),
        }
    }

    /// The answer text to persist: the English translation when the model gave one.
    pub fn answer_text<'a>(&'a self, original: &'a str) -> &'a str {
        self.translated_answer
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(original)
    }
}

/// Human-readable language name for the prompt. Unknown codes read as English.
pub fn language_name(code: Option<&str>) -> &'static str {
    match code {
        Some("hi-IN") => "Hindi",
        Some("mr-IN") => "Marathi",
        _ => "English",
    }
}

pub fn build_evaluation_prompt(
    question: &str,
    user_answer: &str,
    correct_answer: &str,
    language_code: Option<&str>,
) -> String {
    EVALUATION_PROMPT_TEMPLATE
        .replace("{question}", question)
        .replace("{user_answer}", user_answer)
        .replace("{correct_answer}", correct_answer)
        .replace("{language}", language_name(language_code))
}

/// Asks the LLM to grade an answer; falls back to `AnswerEvaluation::fallback` on any error.
pub async fn evaluate_answer(
    llm: &LlmClient,
    question: &str,
    user_answer: &str,
    correct_answer: &str,
    language_code: Option<&str>,
) -> AnswerEvaluation {
    let prompt = build_evaluation_prompt(question, user_answer, correct_answer, language_code);

    match llm
        .call_json::<AnswerEvaluation>(&prompt, &json_system(EVALUATOR_ROLE))
        .await
    {
        Ok(mut evaluation) => {
            evaluation.ratings = evaluation.ratings.clamp(0, MAX_RATING);
            evaluation
        }
        Err(e) => {
            warn!("Answer evaluation failed, storing fallback feedback: {e}");
            AnswerEvaluation::fallback(user_answer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_names() {
        assert_eq!(language_name(Some("hi-IN")), "Hindi");
        assert_eq!(language_name(Some("mr-IN")), "Marathi");
        assert_eq!(language_name(Some("en-US")), "English");
        assert_eq!(language_name(Some("fr-FR")), "English");
        assert_eq!(language_name(None), "English");
    }

    #[test]
    fn test_prompt_fills_every_placeholder() {
        let prompt = build_evaluation_prompt(
            "What is a mutex?",
            "Ek lock hai",
            "A mutual exclusion primitive",
            Some("hi-IN"),
        );
        assert!(prompt.contains(r#"Question: "What is a mutex?""#));
        assert!(prompt.contains(r#"User Answer: "Ek lock hai""#));
        assert!(prompt.contains("preferred language: Hindi"));
        assert!(!prompt.contains("{correct_answer}"));
    }

    #[test]
    fn test_fallback_keeps_original_answer() {
        let evaluation = AnswerEvaluation::fallback("my answer");
        assert_eq!(evaluation.ratings, 0);
        assert_eq!(evaluation.feedback, FALLBACK_FEEDBACK);
        assert_eq!(evaluation.answer_text("my answer"), "my answer");
    }

    #[test]
    fn test_answer_text_prefers_translation() {
        let evaluation = AnswerEvaluation {
            ratings: 6,
            feedback: "Mention lock poisoning.".to_string(),
            translated_answer: Some("It is a lock".to_string()),
        };
        assert_eq!(evaluation.answer_text("Ek lock hai"), "It is a lock");
    }

    #[test]
    fn test_blank_translation_uses_original() {
        let evaluation = AnswerEvaluation {
            ratings: 6,
            feedback: String::new(),
            translated_answer: Some("   ".to_string()),
        };
        assert_eq!(evaluation.answer_text("original"), "original");
    }

    #[test]
    fn test_evaluation_deserializes_without_translation() {
        let evaluation: AnswerEvaluation =
            serde_json::from_str(r#"{"ratings": 8, "feedback": "Good."}"#).unwrap();
        assert_eq!(evaluation.ratings, 8);
        assert!(evaluation.translated_answer.is_none());
    }
}
