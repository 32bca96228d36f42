use serde::{Deserialize, Serialize};

use recall_core::config::CompressionConfig;
use recall_core::conversation::{ConversationContext, ConversationMessage};
use recall_core::errors::MemoryError;

use crate::summary::build_summary;

/// What a fold pass did. A no-op pass reports zero folded messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldReport {
    /// Raw messages folded into the summary.
    pub folded: usize,
    /// Raw messages kept verbatim after the fold.
    pub kept: usize,
}

/// The fold trigger: a context is due once it holds at least
/// `config.threshold` messages.
pub fn should_compress(ctx: &ConversationContext, config: &CompressionConfig) -> bool {
    ctx.message_count >= config.threshold
}

/// Fold everything older than the last `config.keep_recent` messages into
/// one synthetic summary message.
///
/// The synthetic message from an earlier fold is excluded from the folded
/// material and replaced by the new one — summaries never stack. A prefix
/// holding no raw messages leaves the context untouched.
pub fn compress(
    ctx: &mut ConversationContext,
    config: &CompressionConfig,
) -> Result<FoldReport, MemoryError> {
    ctx.verify_integrity()?;

    let len = ctx.messages.len();
    if len <= config.keep_recent {
        return Ok(FoldReport::default());
    }

    let split = len - config.keep_recent;
    let folded = ctx.messages[..split]
        .iter()
        .filter(|m| !m.is_compressed)
        .count();
    if folded == 0 {
        return Ok(FoldReport::default());
    }

    let kept = ctx.messages.split_off(split);
    let prefix = std::mem::take(&mut ctx.messages);
    let summary_text = build_summary(&prefix);

    ctx.messages.reserve(kept.len() + 1);
    ctx.messages.push(ConversationMessage::summary(summary_text.clone()));
    ctx.messages.extend(kept);
    ctx.message_count = ctx.messages.len();
    ctx.is_compressed = true;
    ctx.compressed_summary = Some(summary_text);
    ctx.touch();

    tracing::debug!(
        user_id = ctx.user_id,
        folded,
        kept = config.keep_recent,
        "folded old messages into summary"
    );

    Ok(FoldReport {
        folded,
        kept: config.keep_recent,
    })
}
