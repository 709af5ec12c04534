//! Response selection: decide what the patient actually sees.
//!
//! The completion output is optional and untrusted. Missing, junk or
//! language-leaking output is replaced by the deterministic template for the
//! patient's language, so every turn produces a usable reply.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::language::{Language, LanguageDetectionResult};
use crate::lexicon::templates;

pub mod spam;

/// Three or more consecutive Latin letters: the leak signal for
/// non-English output. Digits (108) and punctuation pass.
static LATIN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]{3,}").expect("leak pattern must compile"));

/// Boilerplate prefixes a completion sometimes wraps around the actual
/// reply. Stripped line by line before the leak check.
const BOILERPLATE_PREFIXES: &[&str] = &[
    "medical assessment:",
    "assessment:",
    "response:",
    "translation:",
    "answer:",
];

const MIN_USEFUL_LEN: usize = 10;

const CLARIFYING_FALLBACK: &str = "I understand your symptoms. Could you tell me more about how \
     long you've been feeling this way and whether you have any other concerns?";

/// Pick the final reply text for the turn.
///
/// `completion` is the raw model output if the completion call succeeded.
/// `raw_input` is the patient's original message, used to pick a symptom
/// template when falling back.
pub fn select(
    completion: Option<&str>,
    detection: &LanguageDetectionResult,
    raw_input: &str,
) -> String {
    let Some(text) = completion else {
        return fallback(detection.language, raw_input);
    };

    let verdict = spam::filter(&strip_boilerplate(text), Some(detection.language));
    if verdict.is_spam {
        warn!(
            score = verdict.score,
            categories = ?verdict.matched_categories,
            "completion output rejected as spam"
        );
        return fallback(detection.language, raw_input);
    }

    let cleaned = verdict.filtered_text;
    if cleaned.trim().len() < MIN_USEFUL_LEN {
        warn!("completion output too short after filtering, using template");
        return fallback(detection.language, raw_input);
    }

    if detection.is_indian_language && has_latin_leak(&cleaned) {
        warn!(
            language = detection.language.tag(),
            "completion leaked Latin script, using template"
        );
        return fallback(detection.language, raw_input);
    }

    cleaned
}

/// Deterministic reply when the completion output is unusable.
pub fn fallback(language: Language, raw_input: &str) -> String {
    if language.is_indian() {
        templates::response(language, templates::template_key_for(raw_input)).to_string()
    } else {
        CLARIFYING_FALLBACK.to_string()
    }
}

/// True if the text contains a run of three or more Latin letters.
pub fn has_latin_leak(text: &str) -> bool {
    LATIN_RUN.is_match(text)
}

/// Rough quality read on a reply, for logging and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QualityLevel {
    Low,
    Medium,
    High,
}

/// Score a reply on crude heuristics: medical substance, structure, Indian
/// context, a consult-a-doctor disclaimer, actionable wording and length.
/// Purely advisory; never changes what the patient sees.
pub fn validate_quality(text: &str) -> QualityLevel {
    let lower = text.to_lowercase();
    let mut points = 0u8;

    const MEDICAL_TERMS: &[&str] = &[
        "fever", "pain", "symptom", "medicine", "dose", "tablet", "बुखार", "दर्द", "दवा",
    ];
    if MEDICAL_TERMS.iter().any(|t| lower.contains(t)) {
        points += 1;
    }
    // Structure: more than one sentence or an explicit list.
    if text.matches(['.', '?', '।']).count() > 1 || text.contains('\n') {
        points += 1;
    }
    const INDIAN_CONTEXT: &[&str] = &["108", "monsoon", "crocin", "dolo", "ors", "ayurved"];
    if INDIAN_CONTEXT.iter().any(|t| lower.contains(t)) {
        points += 1;
    }
    const DISCLAIMER: &[&str] = &["consult", "see a doctor", "डॉक्टर"];
    if DISCLAIMER.iter().any(|t| lower.contains(t)) {
        points += 1;
    }
    const ACTIONABLE: &[&str] = &["take ", "rest", "drink", "avoid", "आराम", "पिएं", "लें"];
    if ACTIONABLE.iter().any(|t| lower.contains(t)) {
        points += 1;
    }
    if (40..=1200).contains(&text.chars().count()) {
        points += 1;
    }

    match points {
        4.. => QualityLevel::High,
        2..=3 => QualityLevel::Medium,
        _ => QualityLevel::Low,
    }
}

fn strip_boilerplate(text: &str) -> String {
    let mut out = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        let lower = trimmed.to_lowercase();
        let stripped = BOILERPLATE_PREFIXES
            .iter()
            .find(|p| lower.starts_with(*p))
            .map(|p| trimmed[p.len()..].trim_start())
            .unwrap_or(trimmed);
        if !stripped.is_empty() {
            out.push(stripped.to_string());
        }
    }
    out.join("\n")
}
