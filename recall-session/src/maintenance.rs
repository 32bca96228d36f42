//! Idle-context maintenance.
//!
//! The store holds contexts for the process lifetime; distinct users
//! accumulate without bound. This pass is the explicit, operator-invoked
//! answer: nothing in the engine calls it automatically.

use chrono::Duration;

use crate::store::ConversationStore;

/// Remove every context idle longer than `max_idle`, by `last_activity`.
/// Returns the number of contexts removed.
pub fn evict_idle(store: &ConversationStore, max_idle: Duration) -> usize {
    let mut removed = 0;

    for user_id in store.user_ids() {
        let stale = store
            .snapshot(user_id)
            .map(|ctx| ctx.idle_duration() > max_idle)
            .unwrap_or(false);
        if stale && store.remove(user_id).is_some() {
            removed += 1;
        }
    }

    if removed > 0 {
        tracing::info!(removed, "evicted idle conversation contexts");
    }
    removed
}
