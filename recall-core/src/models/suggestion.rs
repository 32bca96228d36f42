use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a suggestion wants its target updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateType {
    Append,
}

/// The message content a suggestion proposes to persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionPayload {
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A proposed knowledge-base write derived from a high-importance message.
/// Purely advisory — persisting it requires external approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeSuggestion {
    pub target_file: String,
    pub update_type: UpdateType,
    pub payload: SuggestionPayload,
    /// Human-readable label naming the detected topic.
    pub reason: String,
    /// The importance score of the originating message.
    pub confidence: f64,
}
