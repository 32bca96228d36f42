mod completion_error;
mod delivery_error;
mod memory_error;

pub use completion_error::CompletionError;
pub use delivery_error::DeliveryError;
pub use memory_error::MemoryError;

/// Umbrella error for the whole engine. Collaborator failures are carried
/// through untouched — the caller decides retry and backoff policy.
#[derive(Debug, thiserror::Error)]
pub enum RecallError {
    #[error(transparent)]
    Memory(#[from] MemoryError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type RecallResult<T> = Result<T, RecallError>;
