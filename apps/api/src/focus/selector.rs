//! Weighted random draw of focus areas, without replacement.
//!
//! Each draw:
//! 1. total = Σ weight of topics not yet chosen
//! 2. r = uniform [0, total)
//! 3. walk topics in taxonomy order, r -= weight; first topic with r ≤ 0 wins
//!
//! A topic with weight 7 is therefore 0.7× as likely per draw as one with weight 10.

use rand::Rng;
use tracing::debug;

use crate::focus::taxonomy::{TopicWeights, TOPICS};

/// Selects `count` distinct focus areas with the thread-local RNG.
pub fn select_focus_areas<S: AsRef<str>>(previous_questions: &[S], count: usize) -> Vec<String> {
    select_focus_areas_with(previous_questions, count, &mut rand::thread_rng())
}

/// Selects `count` distinct focus areas, biased away from topics in `previous_questions`.
/// Topics are returned in draw order.
///
/// # Panics
/// Panics if `count` exceeds the taxonomy size.
pub fn select_focus_areas_with<S, R>(previous_questions: &[S], count: usize, rng: &mut R) -> Vec<String>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    assert!(
        count <= TOPICS.len(),
        "cannot select {count} focus areas from a taxonomy of {}",
        TOPICS.len()
    );

    let weights = TopicWeights::from_history(previous_questions);
    let mut pool: Vec<(&'static str, u32)> = weights.iter().collect();
    let mut selected = Vec::with_capacity(count);

    while selected.len() < count {
        let idx = draw_index(&pool, rng);
        let (topic, _) = pool.remove(idx);
        selected.push(topic.to_string());
    }

    debug!(
        history_len = previous_questions.len(),
        ?selected,
        "Selected focus areas"
    );
    selected
}

/// Index into `pool` chosen with probability proportional to its weight.
/// `pool` is non-empty and every weight is ≥ 1.
fn draw_index<R: Rng + ?Sized>(pool: &[(&str, u32)], rng: &mut R) -> usize {
    let total: u32 = pool.iter().map(|(_, w)| w).sum();
    let mut remainder = rng.gen::<f64>() * total as f64;

    for (idx, (_, weight)) in pool.iter().enumerate() {
        remainder -= *weight as f64;
        if remainder <= 0.0 {
            return idx;
        }
    }

    // unreachable for r < total; keeps float edge cases inside the pool
    pool.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::{HashMap, HashSet};

    fn make_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_empty_history_returns_distinct_taxonomy_topics() {
        let mut rng = make_rng();
        let selected = select_focus_areas_with::<&str, _>(&[], 3, &mut rng);

        assert_eq!(selected.len(), 3);
        let unique: HashSet<&String> = selected.iter().collect();
        assert_eq!(unique.len(), 3);
        assert!(selected.iter().all(|t| TOPICS.contains(&t.as_str())));
    }

    #[test]
    fn test_selection_varies_across_trials() {
        let mut rng = make_rng();
        let distinct: HashSet<Vec<String>> = (0..100)
            .map(|_| select_focus_areas_with::<&str, _>(&[], 3, &mut rng))
            .collect();
        assert!(distinct.len() > 10, "only {} distinct selections", distinct.len());
    }

    #[test]
    fn test_same_seed_reproduces_selection() {
        let history = ["Design a rate limiter"];
        let a = select_focus_areas_with(&history, 3, &mut make_rng());
        let b = select_focus_areas_with(&history, 3, &mut make_rng());
        assert_eq!(a, b);
    }

    #[test]
    fn test_recent_topics_drawn_at_seven_tenths_the_rate() {
        let history = ["Tell me about Microservices and API Design"];
        let mut rng = make_rng();
        let trials = 20_000;
        let mut counts: HashMap<String, u32> = HashMap::new();

        for _ in 0..trials {
            for topic in select_focus_areas_with(&history, 1, &mut rng) {
                *counts.entry(topic).or_default() += 1;
            }
        }

        let penalized = ["Microservices", "API Design"];
        let penalized_avg = penalized
            .iter()
            .map(|t| counts.get(*t).copied().unwrap_or(0) as f64)
            .sum::<f64>()
            / penalized.len() as f64;
        let others: Vec<f64> = TOPICS
            .iter()
            .filter(|t| !penalized.contains(t))
            .map(|t| counts.get(*t).copied().unwrap_or(0) as f64)
            .collect();
        let others_avg = others.iter().sum::<f64>() / others.len() as f64;

        let ratio = penalized_avg / others_avg;
        assert!((0.6..0.8).contains(&ratio), "ratio was {ratio}");
    }

    #[test]
    fn test_recent_topics_less_frequent_in_three_topic_draws() {
        let history = ["Tell me about Microservices and API Design"];
        let mut rng = make_rng();
        let mut microservices = 0;
        let mut security = 0;

        for _ in 0..5_000 {
            let selected = select_focus_areas_with(&history, 3, &mut rng);
            microservices += selected.iter().filter(|t| *t == "Microservices").count();
            security += selected.iter().filter(|t| *t == "Security").count();
        }

        assert!(
            microservices < security,
            "microservices={microservices} security={security}"
        );
    }

    #[test]
    fn test_floored_topic_drawn_at_its_floor_weight() {
        let history = vec!["Concurrency bugs you have debugged"; 8];
        assert_eq!(TopicWeights::from_history(&history).weight_of("Concurrency"), Some(1));

        // one weight-1 topic against seventeen at weight 10: p = 1/171 ≈ 0.0058
        let mut rng = make_rng();
        let trials = 50_000;
        let hits = (0..trials)
            .filter(|_| select_focus_areas_with(&history, 1, &mut rng)[0] == "Concurrency")
            .count();

        // expected ≈ 292, σ ≈ 17
        assert!((200..400).contains(&hits), "hits={hits}");
    }

    #[test]
    fn test_zero_count_returns_empty() {
        assert!(select_focus_areas::<&str>(&[], 0).is_empty());
    }

    #[test]
    #[should_panic(expected = "cannot select")]
    fn test_count_above_taxonomy_panics() {
        select_focus_areas::<&str>(&[], TOPICS.len() + 1);
    }

    #[test]
    fn test_draw_index_walks_in_order() {
        // a constant RNG output of 0.0 always lands on the first remaining topic
        let pool = [("A", 5), ("B", 5)];
        let mut rng = rand::rngs::mock::StepRng::new(0, 0);
        assert_eq!(draw_index(&pool, &mut rng), 0);
    }
}
