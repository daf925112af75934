use anyhow::{bail, Context, Result};

use crate::focus::{DEFAULT_FOCUS_AREA_COUNT, TOPICS};
use crate::focus::history::DEFAULT_HISTORY_INTERVIEW_LIMIT;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Focus areas injected into each generated interview (1..=taxonomy size).
    pub focus_area_count: usize,
    /// How many of the candidate's most recent interviews feed focus-area weighting.
    pub history_interview_limit: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            focus_area_count: parse_focus_area_count(std::env::var("FOCUS_AREA_COUNT").ok())?,
            history_interview_limit: std::env::var("HISTORY_INTERVIEW_LIMIT")
                .ok()
                .map(|v| v.parse::<i64>())
                .transpose()
                .context("HISTORY_INTERVIEW_LIMIT must be an integer")?
                .unwrap_or(DEFAULT_HISTORY_INTERVIEW_LIMIT),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_focus_area_count(raw: Option<String>) -> Result<usize> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_FOCUS_AREA_COUNT);
    };
    let count = raw
        .trim()
        .parse::<usize>()
        .context("FOCUS_AREA_COUNT must be a positive integer")?;
    if count == 0 || count > TOPICS.len() {
        bail!("FOCUS_AREA_COUNT must be between 1 and {}", TOPICS.len());
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_area_count_defaults_to_three() {
        assert_eq!(parse_focus_area_count(None).unwrap(), 3);
    }

    #[test]
    fn test_focus_area_count_parses_valid_values() {
        assert_eq!(parse_focus_area_count(Some(" 5 ".to_string())).unwrap(), 5);
        assert_eq!(parse_focus_area_count(Some("18".to_string())).unwrap(), 18);
    }

    #[test]
    fn test_focus_area_count_rejects_out_of_range() {
        assert!(parse_focus_area_count(Some("0".to_string())).is_err());
        assert!(parse_focus_area_count(Some("19".to_string())).is_err());
        assert!(parse_focus_area_count(Some("three".to_string())).is_err());
    }
}
