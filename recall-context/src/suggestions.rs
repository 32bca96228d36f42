use recall_core::config::SuggestionConfig;
use recall_core::conversation::{ConversationContext, ConversationMessage, Role};
use recall_core::models::{KnowledgeSuggestion, SuggestionPayload, UpdateType};

/// One topic → knowledge file route.
pub struct TopicRoute {
    pub topic: &'static str,
    pub target_file: &'static str,
    pub label: &'static str,
}

macro_rules! topic_route {
    ($topic:expr, $target_file:expr, $label:expr) => {
        TopicRoute {
            topic: $topic,
            target_file: $target_file,
            label: $label,
        }
    };
}

/// Fixed routing table. Both language forms of a topic route to the same
/// file; topics absent from the table yield nothing.
pub const TOPIC_ROUTES: &[TopicRoute] = &[
    topic_route!("project", "projects.md", "mentions a project"),
    topic_route!("проект", "projects.md", "mentions a project"),
    topic_route!("meeting", "meetings.md", "mentions a meeting"),
    topic_route!("встреча", "meetings.md", "mentions a meeting"),
    topic_route!("task", "tasks.md", "mentions a task"),
    topic_route!("задача", "tasks.md", "mentions a task"),
    topic_route!("client", "clients.md", "mentions a client"),
    topic_route!("клиент", "clients.md", "mentions a client"),
    topic_route!("idea", "ideas.md", "mentions an idea"),
    topic_route!("идея", "ideas.md", "mentions an idea"),
    topic_route!("decision", "decisions.md", "mentions a decision"),
    topic_route!("решение", "decisions.md", "mentions a decision"),
    topic_route!("deadline", "deadlines.md", "mentions a deadline"),
    topic_route!("дедлайн", "deadlines.md", "mentions a deadline"),
];

/// Derive knowledge-save suggestions from stored importance scores.
///
/// Considers the last `config.max_messages` user messages scoring above
/// `config.min_score`, in chronological order. Every carried topic found
/// in the routing table yields one suggestion with the message's score as
/// confidence — a message tagged with several routed topics yields several
/// suggestions, deliberately undeduplicated.
pub fn suggest(ctx: &ConversationContext, config: &SuggestionConfig) -> Vec<KnowledgeSuggestion> {
    let qualifying: Vec<&ConversationMessage> = ctx
        .messages
        .iter()
        .filter(|m| m.role == Role::User)
        .filter(|m| m.importance.is_some_and(|s| s > config.min_score))
        .collect();
    let start = qualifying.len().saturating_sub(config.max_messages);

    let mut suggestions = Vec::new();
    for message in &qualifying[start..] {
        let Some(content) = message.content.as_deref() else {
            continue;
        };
        let confidence = message.importance.unwrap_or(0.0);
        for topic in &message.topics {
            let Some(route) = TOPIC_ROUTES.iter().find(|r| r.topic == topic.as_str()) else {
                continue;
            };
            suggestions.push(KnowledgeSuggestion {
                target_file: route.target_file.to_string(),
                update_type: UpdateType::Append,
                payload: SuggestionPayload {
                    content: content.to_string(),
                    timestamp: message.timestamp,
                },
                reason: route.label.to_string(),
                confidence,
            });
        }
    }
    suggestions
}
