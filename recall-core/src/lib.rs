//! # recall-core
//!
//! Foundation crate for the recall conversation memory engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod conversation;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MemoryConfig;
pub use conversation::{ConversationContext, ConversationMessage, Role};
pub use errors::{RecallError, RecallResult};
pub use models::{Completion, GenerationParams, KnowledgeSuggestion, PromptMessage};
