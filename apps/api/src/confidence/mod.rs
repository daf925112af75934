// Answer confidence scoring.
// Pure, synchronous scorers: no I/O, no shared state. Handlers call `score_answer`
// and persist the resulting breakdown next to the answer row.

pub mod breakdown;
pub mod speech;
pub mod text;
pub mod webcam;

pub use breakdown::{compute_overall, score_answer, AnswerMetrics, ConfidenceBreakdown};
pub use speech::compute_speech_score;
pub use text::{compute_text_score, word_count};
pub use webcam::compute_webcam_score;
