use crate::errors::RecallResult;
use crate::models::KnowledgeSuggestion;

/// An optional knowledge-base collaborator. Suggestions are advisory and
/// require user approval — the engine never calls this on its own.
pub trait IKnowledgeSink: Send + Sync {
    fn submit(&self, suggestions: &[KnowledgeSuggestion]) -> RecallResult<()>;
}
