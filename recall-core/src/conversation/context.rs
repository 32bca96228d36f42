use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::message::ConversationMessage;
use crate::errors::MemoryError;

/// The full remembered state for one user's conversation. Exclusively owned
/// by that user's key in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationContext {
    pub user_id: i64,
    pub messages: Vec<ConversationMessage>,
    pub created_at: DateTime<Utc>,
    /// Updated on every read or write.
    pub last_activity: DateTime<Utc>,
    /// Always equals `messages.len()`; divergence is corruption.
    pub message_count: usize,
    /// True once at least one fold has occurred.
    pub is_compressed: bool,
    /// Text of the most recent fold.
    pub compressed_summary: Option<String>,
}

impl ConversationContext {
    /// An empty context, created lazily on first contact from a user.
    pub fn new(user_id: i64) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            messages: Vec::new(),
            created_at: now,
            last_activity: now,
            message_count: 0,
            is_compressed: false,
            compressed_summary: None,
        }
    }

    /// Append one message, keeping `message_count` in sync.
    pub fn push(&mut self, message: ConversationMessage) {
        self.messages.push(message);
        self.message_count = self.messages.len();
        self.last_activity = Utc::now();
    }

    /// Record activity without mutating messages.
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Duration since last activity.
    pub fn idle_duration(&self) -> chrono::Duration {
        Utc::now() - self.last_activity
    }

    /// Check the structural invariants: count sync, summary presence when
    /// the compressed flag is set, at most one synthetic message.
    pub fn verify_integrity(&self) -> Result<(), MemoryError> {
        if self.message_count != self.messages.len() {
            return Err(MemoryError::StateCorruption {
                user_id: self.user_id,
                details: format!(
                    "message_count {} does not match stored sequence length {}",
                    self.message_count,
                    self.messages.len()
                ),
            });
        }
        if self.is_compressed && self.compressed_summary.is_none() {
            return Err(MemoryError::StateCorruption {
                user_id: self.user_id,
                details: "compressed flag set but no summary present".to_string(),
            });
        }
        let synthetic = self.messages.iter().filter(|m| m.is_compressed).count();
        if synthetic > 1 {
            return Err(MemoryError::StateCorruption {
                user_id: self.user_id,
                details: format!("{synthetic} synthetic summary messages, expected at most one"),
            });
        }
        Ok(())
    }

    /// Recovery path for a corrupted context: drop synthetic messages,
    /// clear the compression state, and recount.
    pub fn reset_compression(&mut self) {
        self.messages.retain(|m| !m.is_compressed);
        self.is_compressed = false;
        self.compressed_summary = None;
        self.message_count = self.messages.len();
        self.last_activity = Utc::now();
    }
}
