use chrono::{DateTime, Utc};

use recall_core::constants::{MAX_SUMMARY_QUERIES, MAX_SUMMARY_TOPICS, SUMMARY_QUERY_CHARS};
use recall_core::conversation::{ConversationMessage, Role};

/// Render a deterministic one-line summary of a folded prefix.
///
/// Combines the raw message count, the time span, up to
/// `MAX_SUMMARY_TOPICS` first-seen topics, and up to `MAX_SUMMARY_QUERIES`
/// user queries truncated to `SUMMARY_QUERY_CHARS` characters. Synthetic
/// messages from earlier folds are ignored. Empty input renders empty.
pub fn build_summary(prefix: &[ConversationMessage]) -> String {
    let raw: Vec<&ConversationMessage> = prefix.iter().filter(|m| !m.is_compressed).collect();
    let Some(first) = raw.first() else {
        return String::new();
    };
    // Insertion order is chronological order, so the span is first..last.
    let last = raw.last().unwrap_or(first);

    let mut parts = Vec::with_capacity(3);
    parts.push(format!(
        "{} earlier messages, {} to {}",
        raw.len(),
        format_stamp(first.timestamp),
        format_stamp(last.timestamp),
    ));

    let mut topics: Vec<&str> = Vec::new();
    'collect: for message in &raw {
        for topic in &message.topics {
            if topics.len() == MAX_SUMMARY_TOPICS {
                break 'collect;
            }
            if !topics.contains(&topic.as_str()) {
                topics.push(topic);
            }
        }
    }
    if !topics.is_empty() {
        parts.push(format!("Topics: {}", topics.join(", ")));
    }

    let queries: Vec<String> = raw
        .iter()
        .filter(|m| m.role == Role::User && m.has_content())
        .take(MAX_SUMMARY_QUERIES)
        .filter_map(|m| m.content.as_deref())
        .map(|c| truncate_chars(c.trim(), SUMMARY_QUERY_CHARS))
        .collect();
    if !queries.is_empty() {
        parts.push(format!("Asked: {}", queries.join("; ")));
    }

    parts.join(" | ")
}

fn format_stamp(stamp: DateTime<Utc>) -> String {
    stamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Cut to a character budget, marking the cut with an ellipsis.
fn truncate_chars(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        text.to_string()
    } else {
        let cut: String = text.chars().take(budget).collect();
        format!("{cut}…")
    }
}
