//! Feedback summary: aggregates an interview's recorded answers.
//!
//! Only `overall` confidence takes part in aggregation and ordering; the sub-scores
//! are reported per answer as stored.

use serde::Serialize;

use crate::models::answer::UserAnswerRow;

#[derive(Debug, Serialize)]
pub struct FeedbackSummary {
    pub answer_count: usize,
    /// Mean LLM rating out of 10, one decimal place.
    pub average_rating: f64,
    /// Mean overall confidence of answers that carry a breakdown.
    pub average_confidence: Option<u32>,
    /// Highest overall confidence first; answers without a breakdown last.
    pub answers: Vec<UserAnswerRow>,
}

pub fn summarize_feedback(mut answers: Vec<UserAnswerRow>) -> FeedbackSummary {
    let answer_count = answers.len();

    let average_rating = if answer_count == 0 {
        0.0
    } else {
        let total: i64 = answers.iter().map(|a| a.rating as i64).sum();
        (total as f64 / answer_count as f64 * 10.0).round() / 10.0
    };

    let overalls: Vec<u32> = answers
        .iter()
        .filter_map(|a| a.confidence())
        .map(|c| c.overall)
        .collect();
    let average_confidence = (!overalls.is_empty()).then(|| {
        (overalls.iter().sum::<u32>() as f64 / overalls.len() as f64).round() as u32
    });

    // Stable sort keeps insertion order among equal scores
    answers.sort_by_key(|a| std::cmp::Reverse(a.confidence().map(|c| c.overall)));

    FeedbackSummary {
        answer_count,
        average_rating,
        average_confidence,
        answers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn answer(question: &str, rating: i32, overall: Option<i32>) -> UserAnswerRow {
        UserAnswerRow {
            id: Uuid::new_v4(),
            user_id: "user_1".to_string(),
            interview_id: Uuid::nil(),
            question: question.to_string(),
            correct_ans: String::new(),
            user_ans: String::new(),
            feedback: String::new(),
            rating,
            confidence_overall: overall,
            confidence_text: overall.map(|_| 70),
            confidence_speech: overall.map(|_| 85),
            confidence_webcam: overall.map(|_| 95),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_interview() {
        let summary = summarize_feedback(vec![]);
        assert_eq!(summary.answer_count, 0);
        assert_eq!(summary.average_rating, 0.0);
        assert!(summary.average_confidence.is_none());
    }

    #[test]
    fn test_average_rating_rounds_to_one_decimal() {
        let summary = summarize_feedback(vec![
            answer("a", 7, None),
            answer("b", 8, None),
            answer("c", 8, None),
        ]);
        // 23 / 3 = 7.666… → 7.7
        assert_eq!(summary.average_rating, 7.7);
    }

    #[test]
    fn test_average_confidence_skips_answers_without_breakdown() {
        let summary = summarize_feedback(vec![
            answer("a", 5, Some(80)),
            answer("b", 5, None),
            answer("c", 5, Some(61)),
        ]);
        // (80 + 61) / 2 = 70.5 → 71
        assert_eq!(summary.average_confidence, Some(71));
    }

    #[test]
    fn test_answers_sorted_by_overall_confidence() {
        let summary = summarize_feedback(vec![
            answer("low", 5, Some(40)),
            answer("none", 5, None),
            answer("high", 5, Some(92)),
            answer("mid", 5, Some(70)),
        ]);
        let order: Vec<&str> = summary.answers.iter().map(|a| a.question.as_str()).collect();
        assert_eq!(order, vec!["high", "mid", "low", "none"]);
    }
}
