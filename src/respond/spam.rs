//! Low-quality output filter.
//!
//! Scores completion output against known junk patterns: assistant
//! disclaimers, advice-free deflections, generic safety disclaimers,
//! conversational filler and degenerate repetition. Indian-language output
//! bypasses the filter entirely; the patterns are English-specific and must
//! never eat a valid native reply.

use std::sync::LazyLock;

use regex::Regex;

use crate::language::Language;
use crate::types::SpamFilterResult;

const MATCH_WEIGHT: f32 = 0.2;
const SPAM_THRESHOLD: f32 = 0.4;

/// Repeated-window detection: any word window up to this size repeating
/// this many times in a row counts as degenerate output.
const MAX_WINDOW: usize = 3;
const MIN_REPEATS: usize = 3;

static SPAM_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        (
            "ai_disclaimer",
            r"(?i)\bas an ai\b|\bi am an ai\b|\blanguage model\b|\bi'?m (?:just )?a (?:chat)?bot\b",
        ),
        (
            "deflection",
            r"(?i)\bi (?:cannot|can'?t) (?:provide|give|offer) (?:any )?medical advice\b|\bunable to assist with medical\b",
        ),
        (
            "generic_disclaimer",
            r"(?i)\bthis is not medical advice\b|\bnot a substitute for professional medical\b|\bseek professional medical help\b",
        ),
        (
            "conversational_filler",
            r"(?i)\bhow can i help you today\b|\bis there anything else\b|\bwhat else would you like to know\b",
        ),
    ]
    .into_iter()
    .map(|(name, pattern)| {
        // Patterns are static and known-good.
        (name, Regex::new(pattern).expect("spam pattern must compile"))
    })
    .collect()
});

/// Words whose presence marks the output as substantive medical content.
/// A flagged output that still carries these is kept.
const MEDICAL_MARKERS: &[&str] = &[
    "fever",
    "pain",
    "symptom",
    "doctor",
    "hospital",
    "medicine",
    "medication",
    "tablet",
    "rest",
    "hydrat",
    "paracetamol",
    "bukhar",
    "dard",
];

/// Score `text` for spam signals and strip the matched junk. `language` is
/// the target response language; Indian-language output is passed through
/// byte for byte.
pub fn filter(text: &str, language: Option<Language>) -> SpamFilterResult {
    if language.is_some_and(Language::is_indian) {
        return SpamFilterResult {
            is_spam: false,
            score: 0.0,
            matched_categories: Vec::new(),
            filtered_text: text.to_string(),
        };
    }

    let mut score = 0.0f32;
    let mut matched_categories = Vec::new();
    let mut stripped = text.to_string();

    for (name, pattern) in SPAM_PATTERNS.iter() {
        if pattern.is_match(&stripped) {
            score += MATCH_WEIGHT;
            matched_categories.push(name.to_string());
            stripped = pattern.replace_all(&stripped, "").into_owned();
        }
    }

    if has_degenerate_repetition(text) {
        score += MATCH_WEIGHT;
        matched_categories.push("repetition".to_string());
    }

    let lower = text.to_lowercase();
    let has_medical_content = MEDICAL_MARKERS.iter().any(|m| lower.contains(m));

    let filtered_text = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    SpamFilterResult {
        is_spam: score > SPAM_THRESHOLD && !has_medical_content,
        score,
        matched_categories,
        filtered_text,
    }
}

/// Detect a word window of size 1..=3 repeating three or more times in a
/// row. The regex crate has no backreferences, so this is done by hand.
fn has_degenerate_repetition(text: &str) -> bool {
    let words: Vec<&str> = text.split_whitespace().collect();
    for window in 1..=MAX_WINDOW {
        if words.len() < window * MIN_REPEATS {
            continue;
        }
        for start in 0..=(words.len() - window * MIN_REPEATS) {
            let base = &words[start..start + window];
            let repeats = (1..MIN_REPEATS).all(|i| {
                let offset = start + i * window;
                &words[offset..offset + window] == base
            });
            if repeats {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disclaimer_plus_repetition_without_content_is_spam() {
        let text = "As an AI language model I cannot provide medical advice. \
                    sorry sorry sorry";
        let result = filter(text, Some(Language::English));
        assert!(result.is_spam, "score was {}", result.score);
        assert!(result.matched_categories.contains(&"repetition".to_string()));
    }

    #[test]
    fn single_pattern_hit_is_below_threshold() {
        let result = filter(
            "As an AI I suggest rest and plenty of fluids.",
            Some(Language::English),
        );
        assert!(!result.is_spam);
        assert!((result.score - MATCH_WEIGHT).abs() < f32::EPSILON);
        // The disclaimer itself is stripped from the surviving text.
        assert_eq!(result.filtered_text, "I suggest rest and plenty of fluids.");
    }

    #[test]
    fn medical_content_overrides_spam_verdict() {
        let text = "As an AI language model I cannot provide medical advice, but \
                    take paracetamol for the fever and rest well. rest rest rest";
        let result = filter(text, Some(Language::English));
        assert!(result.score > SPAM_THRESHOLD);
        assert!(!result.is_spam);
    }

    #[test]
    fn conversational_filler_is_scored_and_stripped() {
        let text = "How can I help you today? Is there anything else? \
                    What else would you like to know?";
        let result = filter(text, Some(Language::English));
        assert!((result.score - MATCH_WEIGHT).abs() < f32::EPSILON);
        assert!(
            result
                .matched_categories
                .contains(&"conversational_filler".to_string())
        );
    }

    #[test]
    fn stacked_filler_and_disclaimers_without_content_are_spam() {
        let text = "As an AI, this is not medical advice. How can I help you today?";
        let result = filter(text, Some(Language::English));
        assert!(result.is_spam, "score was {}", result.score);
        assert!(
            result
                .matched_categories
                .contains(&"generic_disclaimer".to_string())
        );
    }

    #[test]
    fn indian_language_output_bypasses_the_filter_byte_exact() {
        use crate::language::INDIAN_LANGUAGES;
        let text = "as an ai   as an ai  as an ai";
        for lang in INDIAN_LANGUAGES {
            let result = filter(text, Some(lang));
            assert!(!result.is_spam);
            assert_eq!(result.score, 0.0);
            assert_eq!(result.filtered_text, text, "{lang:?}");
        }
    }

    #[test]
    fn repetition_detection_catches_multi_word_loops() {
        assert!(has_degenerate_repetition("drink water drink water drink water now"));
        assert!(!has_degenerate_repetition("drink plenty of water and rest well"));
    }
}
