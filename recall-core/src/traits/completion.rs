use crate::errors::CompletionError;
use crate::models::{Completion, GenerationParams, PromptMessage};

/// A language-model collaborator. The engine builds the window and consumes
/// the reply; the call itself, with its blocking I/O, happens behind this
/// seam. Failures are returned typed, never retried here.
pub trait ICompletionService: Send + Sync {
    fn complete(
        &self,
        window: &[PromptMessage],
        params: &GenerationParams,
    ) -> Result<Completion, CompletionError>;
}
