use recall_context::suggest;
use recall_core::config::SuggestionConfig;
use recall_core::conversation::{ConversationContext, ConversationMessage};
use recall_core::models::UpdateType;

fn config() -> SuggestionConfig {
    SuggestionConfig::default()
}

fn tagged_user_message(content: &str, score: f64, topics: &[&str]) -> ConversationMessage {
    ConversationMessage::user(
        content,
        score,
        topics.iter().map(|t| t.to_string()).collect(),
    )
}

// ── Routing ───────────────────────────────────────────────────────────────

#[test]
fn two_routed_topics_yield_two_suggestions() {
    let mut ctx = ConversationContext::new(1);
    ctx.push(tagged_user_message(
        "обсудим проект на встрече",
        0.6,
        &["проект", "встреча"],
    ));

    let suggestions = suggest(&ctx, &config());

    assert_eq!(suggestions.len(), 2);
    assert!(suggestions.iter().all(|s| (s.confidence - 0.6).abs() < 1e-9));
    assert!(suggestions.iter().all(|s| s.update_type == UpdateType::Append));
    assert_eq!(suggestions[0].target_file, "projects.md");
    assert_eq!(suggestions[1].target_file, "meetings.md");
    assert_eq!(suggestions[1].reason, "mentions a meeting");
}

#[test]
fn payload_carries_content_and_timestamp() {
    let mut ctx = ConversationContext::new(1);
    ctx.push(tagged_user_message("дедлайн в пятницу", 0.5, &["дедлайн"]));

    let suggestions = suggest(&ctx, &config());

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].payload.content, "дедлайн в пятницу");
    assert_eq!(suggestions[0].payload.timestamp, ctx.messages[0].timestamp);
}

#[test]
fn both_language_forms_route_to_the_same_file() {
    let mut ctx = ConversationContext::new(1);
    ctx.push(tagged_user_message(
        "the project / про проект",
        0.4,
        &["project", "проект"],
    ));

    let suggestions = suggest(&ctx, &config());

    // Deliberately undeduplicated: one suggestion per routed topic.
    assert_eq!(suggestions.len(), 2);
    assert!(suggestions.iter().all(|s| s.target_file == "projects.md"));
}

#[test]
fn unrouted_topics_yield_nothing() {
    let mut ctx = ConversationContext::new(1);
    ctx.push(tagged_user_message("срочный статус", 0.5, &["срочно", "статус"]));

    assert!(suggest(&ctx, &config()).is_empty());
}

// ── The importance gate ───────────────────────────────────────────────────

#[test]
fn gate_is_strict() {
    let mut ctx = ConversationContext::new(1);
    ctx.push(tagged_user_message("ровно на пороге", 0.3, &["проект"]));
    ctx.push(tagged_user_message("чуть выше", 0.31, &["проект"]));

    let suggestions = suggest(&ctx, &config());

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].payload.content, "чуть выше");
}

#[test]
fn assistant_messages_are_ignored() {
    let mut ctx = ConversationContext::new(1);
    ctx.push(ConversationMessage::assistant("я упомянул проект"));

    assert!(suggest(&ctx, &config()).is_empty());
}

// ── The last-M limit ──────────────────────────────────────────────────────

#[test]
fn only_the_last_m_qualifying_messages_are_considered() {
    let mut ctx = ConversationContext::new(1);
    for i in 0..7 {
        ctx.push(tagged_user_message(&format!("важное {i}"), 0.5, &["проект"]));
    }

    let suggestions = suggest(&ctx, &config());

    assert_eq!(suggestions.len(), 5);
    assert_eq!(suggestions[0].payload.content, "важное 2");
    assert_eq!(suggestions[4].payload.content, "важное 6");
}

// ── End-to-end through scoring ────────────────────────────────────────────

#[test]
fn scored_exchange_produces_routable_suggestions() {
    let store = recall_session::ConversationStore::default();
    let text = "Встреча назначена на 15.08.2025, обсудим статус проекта";
    let signal = recall_scoring::analyze(text);
    store.append_exchange(9, text, "ок", &signal).unwrap();

    let ctx = store.snapshot(9).unwrap();
    let suggestions = suggest(&ctx, &store.config().suggestions);

    // Topics встреча and проект are routed; статус is not.
    assert_eq!(suggestions.len(), 2);
    let files: Vec<&str> = suggestions.iter().map(|s| s.target_file.as_str()).collect();
    assert!(files.contains(&"meetings.md"));
    assert!(files.contains(&"projects.md"));
    assert!(suggestions.iter().all(|s| s.confidence > 0.3));
}
