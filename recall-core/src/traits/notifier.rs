use crate::errors::DeliveryError;

/// A message-delivery collaborator (e.g. a messaging provider client).
pub trait INotifier: Send + Sync {
    fn deliver(&self, destination: i64, text: &str) -> Result<(), DeliveryError>;
}
