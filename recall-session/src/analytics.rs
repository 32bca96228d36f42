//! Store-wide counters for diagnostics.

use recall_core::constants::IMPORTANCE_GATE;
use recall_core::conversation::Role;
use recall_core::models::StoreStats;

use crate::store::ConversationStore;

/// Compute counters across every context.
///
/// Walks cloned snapshots, so concurrent writers are never blocked; the
/// result is a consistent-enough view for dashboards and logs, not an
/// atomic one. O(total messages).
pub fn collect_stats(store: &ConversationStore) -> StoreStats {
    let mut stats = StoreStats::default();

    for user_id in store.user_ids() {
        let Some(ctx) = store.snapshot(user_id) else {
            continue;
        };
        stats.contexts += 1;
        stats.total_messages += ctx.messages.len();
        if ctx.is_compressed {
            stats.compressed_contexts += 1;
        }
        stats.high_importance_messages += ctx
            .messages
            .iter()
            .filter(|m| m.role == Role::User)
            .filter(|m| m.importance.is_some_and(|s| s > IMPORTANCE_GATE))
            .count();
    }

    stats
}
