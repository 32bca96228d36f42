//! # recall-scoring
//!
//! Heuristic importance scoring for incoming user messages.
//!
//! The scoring engine is a single loop over declarative rule tables:
//! - **Keyword rules** — fixed bilingual topic keywords, matched as
//!   substrings of the lowercased input; each hit adds its weight and tags
//!   the message with a topic.
//! - **Signal rules** — regex patterns for date-like substrings and numeric
//!   data (percentages, amounts with a unit word); each hit adds its weight
//!   and records a fact tag.
//! - **Length rule** — long messages get a small bonus.
//!
//! `analyze` is pure and total: identical input always yields identical
//! output, blank input yields the zero signal, and the final score is
//! clamped to [0.0, 1.0].

pub mod analyzer;
pub mod rules;

pub use analyzer::{analyze, ImportanceSignal};
