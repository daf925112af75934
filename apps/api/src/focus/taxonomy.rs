//! Fixed topic taxonomy and the per-call weight table derived from question history.

/// Interview topic taxonomy. Order is significant: the weighted draw walks it in this order.
pub const TOPICS: &[&str] = &[
    "Data Structures",
    "Algorithms",
    "System Design",
    "Database Optimization",
    "Security",
    "Performance",
    "Testing",
    "Clean Code",
    "Scalability",
    "Microservices",
    "API Design",
    "Authentication",
    "State Management",
    "Cloud Computing",
    "CI/CD",
    "Debugging",
    "Networking",
    "Concurrency",
];

pub const DEFAULT_FOCUS_AREA_COUNT: usize = 3;

pub const BASE_WEIGHT: u32 = 10;
pub const HISTORY_PENALTY: u32 = 3;
pub const MIN_WEIGHT: u32 = 1;

/// Weight per taxonomy topic, index-aligned with `TOPICS`. Built fresh for every selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicWeights {
    weights: Vec<u32>,
}

impl Default for TopicWeights {
    fn default() -> Self {
        Self {
            weights: vec![BASE_WEIGHT; TOPICS.len()],
        }
    }
}

impl TopicWeights {
    /// Starts every topic at `BASE_WEIGHT` and subtracts `HISTORY_PENALTY` each time a
    /// previous question mentions the topic (case-insensitive substring). Never below `MIN_WEIGHT`.
    pub fn from_history<S: AsRef<str>>(previous_questions: &[S]) -> Self {
        let mut table = Self::default();
        let lowered_topics: Vec<String> = TOPICS.iter().map(|t| t.to_lowercase()).collect();

        for question in previous_questions {
            let question = question.as_ref().to_lowercase();
            for (weight, topic) in table.weights.iter_mut().zip(&lowered_topics) {
                if question.contains(topic.as_str()) {
                    *weight = weight.saturating_sub(HISTORY_PENALTY).max(MIN_WEIGHT);
                }
            }
        }

        table
    }

    pub fn weight_of(&self, topic: &str) -> Option<u32> {
        TOPICS
            .iter()
            .position(|t| *t == topic)
            .map(|idx| self.weights[idx])
    }

    /// `(topic, weight)` pairs in taxonomy order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        TOPICS.iter().copied().zip(self.weights.iter().copied())
    }
}
