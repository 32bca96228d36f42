//! # recall-context
//!
//! Turns a stored conversation into the bounded inputs the collaborators
//! consume.
//!
//! - `build_window` — the ordered message sequence for one model call:
//!   system prompt, previous-context summary, recent raw messages, new
//!   user text. Never longer than `max_messages + 3`.
//! - `suggest` — knowledge-save suggestions derived from stored importance
//!   scores and topic tags, routed through a fixed topic table. Advisory
//!   only; persisting them is the caller's decision.

pub mod suggestions;
pub mod window;

pub use suggestions::{suggest, TopicRoute, TOPIC_ROUTES};
pub use window::build_window;
