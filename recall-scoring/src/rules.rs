use regex::Regex;
use std::sync::LazyLock;

/// Weight added per distinct keyword hit.
pub const KEYWORD_WEIGHT: f64 = 0.1;

/// Weight added when the message exceeds the length threshold.
pub const LENGTH_WEIGHT: f64 = 0.1;

/// One keyword → topic rule. Matched as a substring of the lowercased
/// input; a hit contributes its topic once, deduplicated.
pub struct KeywordRule {
    pub keyword: &'static str,
    pub topic: &'static str,
    pub weight: f64,
}

macro_rules! keyword_rule {
    ($keyword:expr, $topic:expr) => {
        KeywordRule {
            keyword: $keyword,
            topic: $topic,
            weight: KEYWORD_WEIGHT,
        }
    };
}

/// Fixed bilingual keyword table. English and Russian forms are separate
/// rules so a message mixing both languages scores both hits.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    keyword_rule!("project", "project"),
    keyword_rule!("проект", "проект"),
    keyword_rule!("task", "task"),
    keyword_rule!("задач", "задача"),
    keyword_rule!("decision", "decision"),
    keyword_rule!("решени", "решение"),
    keyword_rule!("deadline", "deadline"),
    keyword_rule!("дедлайн", "дедлайн"),
    keyword_rule!("meeting", "meeting"),
    keyword_rule!("встреч", "встреча"),
    keyword_rule!("client", "client"),
    keyword_rule!("клиент", "клиент"),
    keyword_rule!("contract", "contract"),
    keyword_rule!("договор", "договор"),
    keyword_rule!("urgent", "urgent"),
    keyword_rule!("срочн", "срочно"),
    keyword_rule!("plan", "plan"),
    keyword_rule!("план", "план"),
    keyword_rule!("goal", "goal"),
    keyword_rule!("цель", "цель"),
    keyword_rule!("result", "result"),
    keyword_rule!("результат", "результат"),
    keyword_rule!("status", "status"),
    keyword_rule!("статус", "статус"),
    keyword_rule!("problem", "problem"),
    keyword_rule!("проблем", "проблема"),
    keyword_rule!("idea", "idea"),
    keyword_rule!("идея", "идея"),
];

macro_rules! signal_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Date-like substring: 1-2 digit day/month, 2-4 digit year ──────────────
signal_pattern!(RE_DATE, r"\b\d{1,2}[./-]\d{1,2}[./-]\d{2,4}\b");

// ── Percentage, or number followed by a currency/duration unit ────────────
signal_pattern!(
    RE_NUMERIC,
    r"\d+(?:[.,]\d+)?\s*(?:%|\$|€|₽|usd|eur|руб\w*|доллар\w*|евро|час(?:а|ов)?\b|дн(?:я|ей)\b|недел\w*|hour(?:s)?\b|day(?:s)?\b|week(?:s)?\b|dollar(?:s)?\b)"
);

/// One regex → fact rule. A hit adds its weight and records the fact tag.
pub struct SignalRule {
    pub fact: &'static str,
    pub weight: f64,
    pub regex: &'static LazyLock<Option<Regex>>,
}

/// All signal rules in evaluation order.
pub fn signal_rules() -> Vec<SignalRule> {
    vec![
        SignalRule {
            fact: "contains a date",
            weight: 0.2,
            regex: &RE_DATE,
        },
        SignalRule {
            fact: "contains numeric data",
            weight: 0.15,
            regex: &RE_NUMERIC,
        },
    ]
}
