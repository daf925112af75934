//! Combines the three sub-scores into the stored confidence breakdown.

use serde::{Deserialize, Serialize};

use crate::confidence::speech::compute_speech_score;
use crate::confidence::text::{compute_text_score, word_count};
use crate::confidence::webcam::compute_webcam_score;

/// Raw delivery signals for one answer attempt, measured by the client.
/// Snake-case on the wire like every other request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerMetrics {
    pub text: String,
    #[serde(default)]
    pub recording_duration_seconds: f64,
    #[serde(default)]
    pub webcam_instability: f64,
    #[serde(default)]
    pub webcam_active: bool,
}

/// Four-field score record persisted alongside an answer. All fields are 0 – 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceBreakdown {
    pub overall: u32,
    pub text_score: u32,
    pub speech_score: u32,
    pub webcam_score: u32,
}

/// Weighted composite. Without an active webcam the webcam score takes no part
/// in the result at all: 60% text, 40% speech.
pub fn compute_overall(text: u32, speech: u32, webcam: u32, webcam_active: bool) -> u32 {
    let (text, speech, webcam) = (text as f64, speech as f64, webcam as f64);
    let overall = if webcam_active {
        text * 0.4 + speech * 0.3 + webcam * 0.3
    } else {
        text * 0.6 + speech * 0.4
    };
    overall.round() as u32
}

/// Scores an answer attempt. The webcam sub-score is always reported, even when
/// the webcam was off and it did not count toward `overall`.
pub fn score_answer(metrics: &AnswerMetrics) -> ConfidenceBreakdown {
    let text_score = compute_text_score(&metrics.text);
    let speech_score =
        compute_speech_score(metrics.recording_duration_seconds, word_count(&metrics.text));
    let webcam_score = compute_webcam_score(metrics.webcam_instability);

    ConfidenceBreakdown {
        overall: compute_overall(text_score, speech_score, webcam_score, metrics.webcam_active),
        text_score,
        speech_score,
        webcam_score,
    }
}
