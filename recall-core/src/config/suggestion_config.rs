use serde::{Deserialize, Serialize};

use super::defaults;

/// Knowledge-suggestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// How many recent high-importance messages are considered.
    pub max_messages: usize,
    /// Importance score a message must exceed to be considered.
    pub min_score: f64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            max_messages: defaults::DEFAULT_SUGGESTION_MESSAGES,
            min_score: defaults::DEFAULT_SUGGESTION_MIN_SCORE,
        }
    }
}
