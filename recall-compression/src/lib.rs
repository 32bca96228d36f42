//! # recall-compression
//!
//! Folds the old half of a conversation into one synthetic summary message
//! so a context never grows past a fixed bound.
//!
//! - `should_compress` — the count trigger.
//! - `compress` — replaces the droppable prefix with a summary message,
//!   keeping the most recent messages verbatim. Immediately after a fold a
//!   context holds exactly `keep_recent + 1` messages, however much history
//!   it has accumulated.
//! - `build_summary` — deterministic rendering of the folded prefix:
//!   message count, time span, first-seen topics, truncated user queries.
//!
//! A synthetic summary message is never itself re-folded; the next fold
//! replaces it rather than stacking summaries.

pub mod policy;
pub mod summary;

pub use policy::{compress, should_compress, FoldReport};
pub use summary::build_summary;
