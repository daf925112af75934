// LLM prompt constants for interview question generation.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Role line of the question-generation system prompt.
pub const INTERVIEWER_ROLE: &str = "You are a Senior Technical Interviewer preparing a mock \
    interview tailored to a candidate's profile.";

/// Number of questions requested per interview.
pub const QUESTION_COUNT: usize = 5;

/// Tone used when the request does not name one.
pub const DEFAULT_INTERVIEWER_STYLE: &str = "Neutral";

/// Question-generation prompt template. Replace `{position}`, `{description}`,
/// `{experience}`, `{tech_stack}`, `{interviewer_style}` and `{question_count}` before sending.
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"Generate a technical interview for the following candidate profile.

Job Position: {position}
Job Description: {description}
Years of Experience: {experience}
Tech Stack: {tech_stack}
Interviewer Style: {interviewer_style}

Generate exactly {question_count} interview questions with reference answers.
Match the difficulty to the candidate's years of experience.
Reflect the selected Interviewer Style ({interviewer_style}): if "Friendly", use encouraging phrasing; if "Strict", be direct and probing.
Mix conceptual, practical and scenario-based questions grounded in the tech stack.

Return a JSON array with this EXACT schema (no extra fields):
[
  {"question": "How would you ...?", "answer": "A strong answer covers ..."}
]"#;
