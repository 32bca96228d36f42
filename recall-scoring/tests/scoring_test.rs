use recall_scoring::analyze;

// ── Blank input yields the zero signal ────────────────────────────────────

#[test]
fn empty_input_scores_zero() {
    let signal = analyze("");
    assert_eq!(signal.score, 0.0);
    assert!(signal.topics.is_empty());
    assert!(signal.facts.is_empty());
    assert!(!signal.is_important);
}

#[test]
fn whitespace_input_scores_zero() {
    let signal = analyze("   \n\t  ");
    assert_eq!(signal.score, 0.0);
    assert!(signal.topics.is_empty());
}

// ── Keyword rules ─────────────────────────────────────────────────────────

#[test]
fn keywords_are_matched_case_insensitively() {
    let signal = analyze("СРОЧНО: обсудить ПРОЕКТ");
    assert!(signal.topics.contains(&"срочно".to_string()));
    assert!(signal.topics.contains(&"проект".to_string()));
    assert!((signal.score - 0.2).abs() < 1e-9);
}

#[test]
fn repeated_keyword_counts_once() {
    let signal = analyze("проект проект проект");
    assert_eq!(signal.topics, vec!["проект".to_string()]);
    assert!((signal.score - 0.1).abs() < 1e-9);
}

#[test]
fn mixed_language_keywords_score_separately() {
    let signal = analyze("the project / про этот проект");
    assert!(signal.topics.contains(&"project".to_string()));
    assert!(signal.topics.contains(&"проект".to_string()));
    assert!((signal.score - 0.2).abs() < 1e-9);
}

#[test]
fn inflected_russian_forms_match_their_stem() {
    let signal = analyze("перенесем встречу, есть проблемы");
    assert!(signal.topics.contains(&"встреча".to_string()));
    assert!(signal.topics.contains(&"проблема".to_string()));
}

// ── Signal rules ──────────────────────────────────────────────────────────

#[test]
fn date_substring_adds_weight_and_fact() {
    let signal = analyze("сделаем до 01.09.2025");
    assert!(signal.facts.contains(&"contains a date".to_string()));
    assert!((signal.score - 0.2).abs() < 1e-9);
}

#[test]
fn date_separators_slash_and_dash_match() {
    assert!(analyze("due 1/9/25").facts.contains(&"contains a date".to_string()));
    assert!(analyze("due 01-09-2025").facts.contains(&"contains a date".to_string()));
}

#[test]
fn percentage_adds_numeric_fact() {
    let signal = analyze("конверсия выросла на 15%");
    assert!(signal.facts.contains(&"contains numeric data".to_string()));
    assert!((signal.score - 0.15).abs() < 1e-9);
}

#[test]
fn amount_with_unit_word_adds_numeric_fact() {
    for text in ["бюджет 5000 рублей", "займет 3 часа", "in 2 days", "costs 100 dollars"] {
        let signal = analyze(text);
        assert!(
            signal.facts.contains(&"contains numeric data".to_string()),
            "no numeric fact for: {text}"
        );
    }
}

#[test]
fn bare_number_without_unit_is_not_numeric_data() {
    let signal = analyze("комната 402");
    assert!(signal.facts.is_empty());
    assert_eq!(signal.score, 0.0);
}

// ── Length rule ───────────────────────────────────────────────────────────

#[test]
fn long_message_gets_length_bonus() {
    let text = "ничего важного ".repeat(10); // 150 chars, no keywords
    let signal = analyze(&text);
    assert!((signal.score - 0.1).abs() < 1e-9);
    assert!(!signal.is_important);
}

#[test]
fn length_is_measured_in_characters_not_bytes() {
    // 60 Cyrillic chars = 120 bytes; must NOT get the length bonus.
    let text = "д".repeat(60);
    let signal = analyze(&text);
    assert_eq!(signal.score, 0.0);
}

// ── Clamping and the importance gate ──────────────────────────────────────

#[test]
fn score_is_clamped_to_one() {
    let text = "urgent project task decision deadline meeting client contract \
                plan goal result status problem idea 15.08.2025 и 100 dollars";
    let signal = analyze(text);
    assert_eq!(signal.score, 1.0);
    assert!(signal.is_important);
}

#[test]
fn gate_is_strictly_above_threshold() {
    // Three keywords: score lands exactly on 0.3, which is not "important".
    let signal = analyze("план задача цель");
    assert!((signal.score - 0.3).abs() < 1e-9);
    assert!(!signal.is_important);
}

// ── The meeting/date scenario ─────────────────────────────────────────────

#[test]
fn meeting_with_date_scenario() {
    let signal = analyze("Встреча назначена на 15.08.2025, обсудим статус проекта");

    assert!(signal.topics.contains(&"встреча".to_string()));
    assert!(signal.topics.contains(&"статус".to_string()));
    assert!(signal.topics.contains(&"проект".to_string()));
    assert!(signal.facts.contains(&"contains a date".to_string()));
    assert!(signal.score >= 0.5);
    assert!(signal.is_important);
}
