pub mod prompt;
pub mod stats;
pub mod suggestion;

pub use prompt::{Completion, FinishReason, GenerationParams, PromptMessage};
pub use stats::StoreStats;
pub use suggestion::{KnowledgeSuggestion, SuggestionPayload, UpdateType};
