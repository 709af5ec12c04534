//! Diagnostic agent: structured symptom extraction and specialist routing.

use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::terms::{
    ASSOCIATED_SYMPTOMS, DEFAULT_DIFFERENTIAL, DEFAULT_SPECIALIST, DIFFERENTIALS, MILD_KEYWORDS,
    SEVERE_KEYWORDS, SPECIALIZATIONS,
};
use crate::types::{
    AgentResponse, AgentRole, PatientContext, Severity, StructuredSymptoms, UrgencyLevel,
};

const CONFIDENCE: f32 = 0.88;

/// Complaints recognized as the primary one, most specific first.
const PRIMARY_COMPLAINTS: &[&str] = &[
    "chest pain",
    "breathing difficulty",
    "abdominal pain",
    "stomach upset",
    "acid reflux",
    "headache",
    "fever",
    "cough",
    "diarrhea",
    "vomiting",
    "dizziness",
    "myalgia",
    "fatigue",
];

/// Duration phrase: a number (ASCII or Devanagari digits) followed by a
/// unit in English, romanized Hindi or Devanagari.
static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d+|[०-९]+)\s*(days?|din|weeks?|hafta|hafte|months?|mahina|mahine|hours?|ghanta|ghante|दिन|हफ्ता|हफ्ते|महीना|महीने|घंटा|घंटे)\b",
    )
    .expect("duration pattern must compile")
});

/// Analyze the normalized input into structured symptoms and decide whether
/// the case needs the emergency agent or can proceed to treatment.
///
/// Local severity: severe wording or more than three associated symptoms is
/// high and escalates to the emergency agent; moderate wording or more than
/// one associated symptom is medium; everything else low. The walk-wide
/// urgency only ever goes up from the incoming level.
pub fn assess(ctx: &PatientContext, incoming: UrgencyLevel) -> AgentResponse {
    let symptoms = extract(&ctx.normalized_input);

    let local = if symptoms.severity == Severity::Severe || symptoms.associated.len() > 3 {
        UrgencyLevel::High
    } else if symptoms.severity == Severity::Moderate || symptoms.associated.len() > 1 {
        UrgencyLevel::Medium
    } else {
        UrgencyLevel::Low
    };

    let next_agent = if local == UrgencyLevel::High {
        Some(AgentRole::Emergency)
    } else {
        Some(AgentRole::Treatment)
    };

    let mut recommendations = vec![format!("Consult: {}", symptoms.specialist)];
    if !symptoms.differentials.is_empty() {
        recommendations.push(format!("Consider: {}", symptoms.differentials.join(", ")));
    }

    AgentResponse {
        role: AgentRole::Diagnostic,
        assessment: format!(
            "Primary complaint: {} ({:?} severity{}). Associated: [{}].",
            symptoms.primary_complaint,
            symptoms.severity,
            symptoms
                .duration
                .as_deref()
                .map(|d| format!(", duration {d}"))
                .unwrap_or_default(),
            symptoms.associated.join(", ")
        ),
        recommendations,
        urgency: incoming.max(local),
        next_agent,
        confidence: CONFIDENCE,
        regional_note: symptoms
            .differentials
            .iter()
            .any(|d| d.contains("Dengue") || d.contains("Malaria"))
            .then(|| {
                "Dengue and malaria are common during monsoon; a blood test can rule them out"
                    .to_string()
            }),
    }
}

/// Structured extraction over normalized text. Deterministic keyword logic,
/// shared with tests and the prompt builder.
pub fn extract(normalized: &str) -> StructuredSymptoms {
    let primary_complaint = PRIMARY_COMPLAINTS
        .iter()
        .find(|c| normalized.contains(*c))
        .map(|c| c.to_string())
        .unwrap_or_else(|| "general discomfort".to_string());

    let severity = if SEVERE_KEYWORDS.iter().any(|k| normalized.contains(k)) {
        Severity::Severe
    } else if MILD_KEYWORDS.iter().any(|k| normalized.contains(k)) {
        Severity::Mild
    } else {
        Severity::Moderate
    };

    let duration = DURATION
        .find(normalized)
        .map(|m| m.as_str().to_string());

    let associated: Vec<String> = ASSOCIATED_SYMPTOMS
        .iter()
        .filter(|s| normalized.contains(*s) && **s != primary_complaint)
        .map(|s| s.to_string())
        .collect();

    let specialist = SPECIALIZATIONS
        .iter()
        .find(|(patterns, _)| patterns.split('|').any(|p| normalized.contains(p)))
        .map(|(_, s)| s.to_string())
        .unwrap_or_else(|| DEFAULT_SPECIALIST.to_string());

    let differentials = DIFFERENTIALS
        .iter()
        .find(|(keywords, _)| keywords.iter().all(|k| normalized.contains(k)))
        .map(|(_, d)| d.iter().map(|s| s.to_string()).collect())
        .unwrap_or_else(|| DEFAULT_DIFFERENTIAL.iter().map(|s| s.to_string()).collect());

    StructuredSymptoms {
        primary_complaint,
        severity,
        duration,
        associated,
        specialist,
        differentials,
    }
}
