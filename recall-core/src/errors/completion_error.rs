/// Failures reported by a completion collaborator.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion request failed: {message}")]
    Network { message: String },

    #[error("completion provider rate limited, retry after {retry_after_secs:?}s")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("malformed completion response: {details}")]
    MalformedResponse { details: String },
}
