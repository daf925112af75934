//! Text confidence: filler-word density and sentence structure of an answer transcript.
//!
//! Algorithm:
//! 1. filler_density = filler occurrences per 100 words
//! 2. filler_score = clamp(100 - filler_density × 6, 40, 100)
//! 3. structure_score from the average words per sentence:
//!    (8, 25) → 100, ≥ 25 → 90 (rambling), otherwise → 60 (choppy)
//! 4. text_score = round(0.7 × filler_score + 0.3 × structure_score)

use std::sync::OnceLock;

use regex::Regex;

/// Conversational hedges counted against the answer. Multi-word entries match as phrases.
pub const FILLER_PHRASES: &[&str] = &[
    "um",
    "uh",
    "like",
    "you know",
    "i mean",
    "sort of",
    "kind of",
    "actually",
    "basically",
    "literally",
];

const FILLER_PENALTY_PER_PERCENT: f64 = 6.0;
const MIN_FILLER_SCORE: f64 = 40.0;
const MAX_FILLER_SCORE: f64 = 100.0;

const FILLER_WEIGHT: f64 = 0.7;
const STRUCTURE_WEIGHT: f64 = 0.3;

/// One whole-word regex per filler phrase, compiled once.
fn filler_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        FILLER_PHRASES
            .iter()
            .map(|phrase| {
                let body = phrase
                    .split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s+");
                Regex::new(&format!(r"\b{body}\b")).expect("Invalid filler regex")
            })
            .collect()
    })
}

fn sentence_boundary() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| Regex::new(r"[.!?]+").expect("Invalid sentence regex"))
}

/// Whitespace-delimited token count. The speech scorer uses the same count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Total filler occurrences across all phrases, case-insensitive.
pub fn count_fillers(text: &str) -> usize {
    let lower = text.to_lowercase();
    filler_patterns()
        .iter()
        .map(|re| re.find_iter(&lower).count())
        .sum()
}

/// Average words per sentence over every segment between `.`, `!` and `?` runs.
/// A segment with no words (such as the one after a final period) still counts as a
/// sentence of one token, so `"Done."` averages 1.
pub fn average_sentence_length(text: &str) -> f64 {
    let lengths: Vec<usize> = sentence_boundary()
        .split(text)
        .map(|segment| word_count(segment).max(1))
        .collect();

    let total: usize = lengths.iter().sum();
    total as f64 / lengths.len().max(1) as f64
}

fn filler_score(fillers: usize, words: usize) -> f64 {
    let density = if words > 0 {
        fillers as f64 / words as f64 * 100.0
    } else {
        0.0
    };
    (MAX_FILLER_SCORE - density * FILLER_PENALTY_PER_PERCENT).clamp(MIN_FILLER_SCORE, MAX_FILLER_SCORE)
}

fn structure_score(avg_sentence_length: f64) -> f64 {
    if avg_sentence_length > 8.0 && avg_sentence_length < 25.0 {
        100.0
    } else if avg_sentence_length >= 25.0 {
        90.0
    } else {
        60.0
    }
}

/// Scores the transcript of an answer on a 0–100 scale. Empty text scores 0.
pub fn compute_text_score(text: &str) -> u32 {
    let words = word_count(text);
    if words == 0 {
        return 0;
    }

    let fillers = filler_score(count_fillers(text), words);
    let structure = structure_score(average_sentence_length(text));

    (fillers * FILLER_WEIGHT + structure * STRUCTURE_WEIGHT).round() as u32
}
