// Interview generation.
// Pipeline: question history → focus areas → prompt → LLM → interviews row.
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
