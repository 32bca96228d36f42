use serde::{Deserialize, Serialize};

/// Store-wide counters, computed on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Contexts currently held.
    pub contexts: usize,
    /// Messages across all contexts, synthetic summaries included.
    pub total_messages: usize,
    /// Contexts that have been folded at least once.
    pub compressed_contexts: usize,
    /// User messages scoring above the importance gate.
    pub high_importance_messages: usize,
}
