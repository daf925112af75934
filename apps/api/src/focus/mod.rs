// Adaptive focus-area selection for interview generation.
// Topics seen in the candidate's recent interviews are down-weighted so the next
// batch of questions drifts toward material they have not practised yet.

pub mod history;
pub mod prompts;
pub mod selector;
pub mod taxonomy;

pub use history::{previous_question_texts_or_empty, PgQuestionHistory, QuestionHistory};
pub use prompts::focus_area_instructions;
pub use selector::{select_focus_areas, select_focus_areas_with};
pub use taxonomy::{TopicWeights, DEFAULT_FOCUS_AREA_COUNT, TOPICS};
