use dashmap::DashMap;
use std::sync::Arc;

use recall_compression::{compress, should_compress};
use recall_core::config::MemoryConfig;
use recall_core::conversation::{ConversationContext, ConversationMessage};
use recall_core::errors::RecallResult;
use recall_scoring::{analyze, ImportanceSignal};

/// Thread-safe conversation store using `DashMap` for concurrent access.
pub struct ConversationStore {
    contexts: Arc<DashMap<i64, ConversationContext>>,
    config: MemoryConfig,
}

impl ConversationStore {
    /// Create a store with the given configuration.
    pub fn new(config: MemoryConfig) -> Self {
        Self {
            contexts: Arc::new(DashMap::new()),
            config,
        }
    }

    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// Return the context for a user, creating an empty one on first
    /// contact. Counts as activity. Never fails.
    pub fn get_or_create(&self, user_id: i64) -> ConversationContext {
        let mut entry = self
            .contexts
            .entry(user_id)
            .or_insert_with(|| ConversationContext::new(user_id));
        entry.touch();
        entry.clone()
    }

    /// Cloned snapshot of a context, if the user is known.
    pub fn snapshot(&self, user_id: i64) -> Option<ConversationContext> {
        self.contexts.get(&user_id).map(|r| r.clone())
    }

    /// Replace a context wholesale. The context's own `user_id` is the key.
    pub fn insert(&self, ctx: ConversationContext) {
        self.contexts.insert(ctx.user_id, ctx);
    }

    /// Score the user text, then append the exchange.
    pub fn record_exchange(
        &self,
        user_id: i64,
        user_text: &str,
        assistant_text: &str,
    ) -> RecallResult<usize> {
        let signal = analyze(user_text);
        self.append_exchange(user_id, user_text, assistant_text, &signal)
    }

    /// Append a scored user/assistant pair, then fold if the context is
    /// due. Runs as one atomic unit under the user's entry guard, so two
    /// concurrent messages from the same user cannot race on the count or
    /// produce overlapping folds. Returns the updated message count.
    pub fn append_exchange(
        &self,
        user_id: i64,
        user_text: &str,
        assistant_text: &str,
        signal: &ImportanceSignal,
    ) -> RecallResult<usize> {
        let mut entry = self
            .contexts
            .entry(user_id)
            .or_insert_with(|| ConversationContext::new(user_id));
        let ctx = entry.value_mut();

        ctx.push(ConversationMessage::user(
            user_text,
            signal.score,
            signal.topics.clone(),
        ));
        ctx.push(ConversationMessage::assistant(assistant_text));

        if should_compress(ctx, &self.config.compression) {
            compress(ctx, &self.config.compression)?;
        }

        Ok(ctx.message_count)
    }

    /// Reset a corrupted context to an uncompressed state. Returns true if
    /// a reset happened, false if the context is absent or healthy.
    pub fn repair(&self, user_id: i64) -> bool {
        let Some(mut entry) = self.contexts.get_mut(&user_id) else {
            return false;
        };
        if entry.verify_integrity().is_ok() {
            return false;
        }
        entry.reset_compression();
        tracing::warn!(user_id, "reset corrupted context to uncompressed state");
        true
    }

    /// Remove a context.
    pub fn remove(&self, user_id: i64) -> Option<ConversationContext> {
        self.contexts.remove(&user_id).map(|(_, v)| v)
    }

    /// Number of contexts currently held.
    pub fn context_count(&self) -> usize {
        self.contexts.len()
    }

    /// All known user ids.
    pub fn user_ids(&self) -> Vec<i64> {
        self.contexts.iter().map(|r| *r.key()).collect()
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new(MemoryConfig::default())
    }
}
