/// Conversation-state errors.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// A context violated one of its structural invariants. Recovery is to
    /// reset the context to an uncompressed state, not to propagate it.
    #[error("context for user {user_id} is corrupted: {details}")]
    StateCorruption { user_id: i64, details: String },
}
