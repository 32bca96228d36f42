use serde::{Deserialize, Serialize};

use recall_core::constants::{IMPORTANCE_GATE, LONG_MESSAGE_CHARS};

use crate::rules;

/// The analysis result for one message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportanceSignal {
    /// Heuristic estimate in [0.0, 1.0] of how worth-remembering the text is.
    pub score: f64,
    /// Deduplicated topic tags, rule-table order.
    pub topics: Vec<String>,
    /// Fact tags from signal rules.
    pub facts: Vec<String>,
    /// `score > 0.3`.
    pub is_important: bool,
}

/// Score a message against the rule tables.
///
/// Pure and stateless: no external calls, identical input yields identical
/// output. Blank input yields the zero signal, never an error.
pub fn analyze(text: &str) -> ImportanceSignal {
    if text.trim().is_empty() {
        return ImportanceSignal::default();
    }

    let lowered = text.to_lowercase();
    let mut score = 0.0;
    let mut topics: Vec<String> = Vec::new();

    for rule in rules::KEYWORD_RULES {
        if lowered.contains(rule.keyword) {
            score += rule.weight;
            if !topics.iter().any(|t| t == rule.topic) {
                topics.push(rule.topic.to_string());
            }
        }
    }

    let mut facts = Vec::new();
    for rule in rules::signal_rules() {
        // A pattern that failed to compile simply never matches.
        let Some(re) = rule.regex.as_ref() else { continue };
        if re.is_match(&lowered) {
            score += rule.weight;
            facts.push(rule.fact.to_string());
        }
    }

    // Character count, not byte length — Cyrillic text is multi-byte.
    if text.chars().count() > LONG_MESSAGE_CHARS {
        score += rules::LENGTH_WEIGHT;
    }

    let score = score.clamp(0.0, 1.0);
    ImportanceSignal {
        score,
        topics,
        facts,
        is_important: score > IMPORTANCE_GATE,
    }
}
