// Answer recording and feedback.
// Each recorded answer gets a deterministic confidence breakdown plus an LLM rating.

pub mod evaluation;
pub mod handlers;
pub mod prompts;
pub mod recorder;
pub mod summary;
