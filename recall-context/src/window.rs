use recall_core::config::WindowConfig;
use recall_core::conversation::{ConversationContext, ConversationMessage};
use recall_core::models::PromptMessage;

/// Assemble the bounded message window for one model call.
///
/// Layout, in order: the system prompt; one system-role entry wrapping the
/// previous-context summary when the context has been folded; the last
/// `config.max_messages` raw messages with non-blank content, in original
/// order; the new user text. Total length is at most `max_messages + 3`
/// however much history the context holds. The synthetic summary message
/// is never emitted as a raw entry — its content reaches the window only
/// through the summary wrapper.
pub fn build_window(
    system_prompt: &str,
    ctx: &ConversationContext,
    user_text: &str,
    config: &WindowConfig,
) -> Vec<PromptMessage> {
    let mut window = Vec::with_capacity(config.max_messages + 3);
    window.push(PromptMessage::system(system_prompt));

    if let Some(summary) = &ctx.compressed_summary {
        window.push(PromptMessage::system(format!("Previous context: {summary}")));
    }

    let recent: Vec<&ConversationMessage> = ctx
        .messages
        .iter()
        .filter(|m| !m.is_compressed && m.has_content())
        .collect();
    let start = recent.len().saturating_sub(config.max_messages);
    for message in &recent[start..] {
        let Some(content) = message.content.as_deref() else {
            continue;
        };
        window.push(PromptMessage {
            role: message.role,
            content: content.to_string(),
        });
    }

    window.push(PromptMessage::user(user_text));
    window
}
