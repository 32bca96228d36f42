//! # recall-session
//!
//! Concurrent per-user conversation memory.
//!
//! `ConversationStore` holds one `ConversationContext` per user key in a
//! `DashMap`. All mutation for one user runs inside a single entry guard,
//! so the append-then-maybe-fold sequence is a per-key critical section;
//! operations on distinct keys never contend on each other's entries.
//!
//! The store never evicts on its own — contexts live for the process
//! lifetime unless `maintenance::evict_idle` is invoked explicitly.

pub mod analytics;
pub mod maintenance;
pub mod store;

pub use analytics::collect_stats;
pub use maintenance::evict_idle;
pub use store::ConversationStore;
