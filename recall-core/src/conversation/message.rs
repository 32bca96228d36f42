use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::role::Role;

/// One remembered message. Insertion order in a context is chronological
/// order and is never changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: Role,
    /// Absent or blank content excludes the message from windows and scoring.
    pub content: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// True only for the single synthetic summary message a fold produces.
    /// Such a message is never itself re-folded.
    pub is_compressed: bool,
    /// Importance score in [0.0, 1.0], set at append time for user messages.
    pub importance: Option<f64>,
    /// Deduplicated topic tags, insertion order preserved.
    pub topics: Vec<String>,
}

impl ConversationMessage {
    /// A user message carrying its importance signal.
    pub fn user(content: impl Into<String>, importance: f64, topics: Vec<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(content.into()),
            timestamp: Utc::now(),
            is_compressed: false,
            importance: Some(importance),
            topics,
        }
    }

    /// An assistant reply. Assistant messages carry no importance score.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: Some(content.into()),
            timestamp: Utc::now(),
            is_compressed: false,
            importance: None,
            topics: Vec::new(),
        }
    }

    /// The synthetic summary message a fold leaves behind.
    pub fn summary(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: Some(text.into()),
            timestamp: Utc::now(),
            is_compressed: true,
            importance: None,
            topics: Vec::new(),
        }
    }

    /// Whether the message has non-blank content.
    pub fn has_content(&self) -> bool {
        self.content
            .as_deref()
            .is_some_and(|c| !c.trim().is_empty())
    }
}
