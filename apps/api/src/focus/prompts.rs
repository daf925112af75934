// Prompt fragment that carries the selected focus areas into question generation.

/// Instruction block appended to the question-generation prompt.
/// Returns an empty string when nothing was selected so the prompt is left unchanged.
pub fn focus_area_instructions<S: AsRef<str>>(focus_areas: &[S]) -> String {
    if focus_areas.is_empty() {
        return String::new();
    }

    let bullets = focus_areas
        .iter()
        .map(|area| format!("- {}", area.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n\nFOCUS AREAS:\n\
        To keep this interview fresh, prioritize questions in these areas:\n\
        {bullets}\n\
        Avoid questions that closely resemble standard, commonly asked interview questions. \
        Prefer unique scenarios that fit the candidate's experience level.\n"
    )
}
