/// Failures reported by a message-delivery collaborator.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("destination {destination} is unreachable")]
    Unreachable { destination: i64 },

    #[error("malformed destination: {input}")]
    MalformedDestination { input: String },

    #[error("malformed delivery response: {details}")]
    MalformedResponse { details: String },
}
