mod completion;
mod knowledge;
mod notifier;

pub use completion::ICompletionService;
pub use knowledge::IKnowledgeSink;
pub use notifier::INotifier;
