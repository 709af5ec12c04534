//! Treatment agent: care plan, home remedies and OTC suggestions.

use crate::lexicon::treatment::{
    HOME_REMEDIES, MAX_HOME_REMEDIES, MEDICATION_CAVEAT, MEDICATIONS, TREATMENT_PLANS,
};
use crate::types::{AgentResponse, AgentRole, PatientContext, UrgencyLevel};

const CONFIDENCE: f32 = 0.82;

/// Terminal agent for non-emergency turns. Builds a keyword-matched care
/// plan; the medication caveat is always appended when any medication is
/// suggested.
pub fn assess(ctx: &PatientContext, incoming: UrgencyLevel) -> AgentResponse {
    let text = &ctx.normalized_input;
    let mut recommendations = Vec::new();

    for (keyword, steps) in TREATMENT_PLANS {
        if text.contains(keyword) {
            recommendations.extend(steps.iter().map(|s| s.to_string()));
        }
    }

    let mut remedies: Vec<String> = Vec::new();
    for (keyword, items) in HOME_REMEDIES {
        if text.contains(keyword) {
            for item in *items {
                if remedies.len() < MAX_HOME_REMEDIES && !remedies.contains(&item.to_string()) {
                    remedies.push(item.to_string());
                }
            }
        }
    }
    recommendations.extend(remedies);

    let mut suggested_medication = false;
    for (keyword, meds) in MEDICATIONS {
        if text.contains(keyword) {
            suggested_medication = true;
            recommendations.extend(meds.iter().map(|m| m.to_string()));
        }
    }
    if suggested_medication {
        recommendations.push(MEDICATION_CAVEAT.to_string());
    }

    if recommendations.is_empty() {
        recommendations.push("Rest, hydrate and monitor symptoms".to_string());
        recommendations.push("See a doctor if symptoms persist beyond 2-3 days".to_string());
    }

    AgentResponse {
        role: AgentRole::Treatment,
        assessment: "Care plan prepared based on reported symptoms.".to_string(),
        recommendations,
        urgency: incoming,
        next_agent: None,
        confidence: CONFIDENCE,
        regional_note: suggested_medication.then(|| {
            "Paracetamol is sold over the counter in India as Crocin or Dolo".to_string()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{Language, LanguageDetectionResult};

    fn ctx(input: &str) -> PatientContext {
        PatientContext {
            raw_input: input.to_string(),
            normalized_input: input.to_lowercase(),
            detection: LanguageDetectionResult {
                language: Language::English,
                confidence: 0.9,
                is_indian_language: false,
            },
            age: None,
            gender: None,
            location: None,
            allergies: Vec::new(),
            emergency_flags: Vec::new(),
        }
    }

    #[test]
    fn fever_plan_includes_paracetamol_and_caveat() {
        let response = assess(&ctx("fever since last night"), UrgencyLevel::Medium);
        assert!(
            response
                .recommendations
                .iter()
                .any(|r| r.contains("Paracetamol"))
        );
        assert_eq!(
            response.recommendations.last().map(String::as_str),
            Some(MEDICATION_CAVEAT)
        );
        // OTC brand context rides along with any medication suggestion.
        assert!(response.regional_note.as_deref().is_some_and(|n| n.contains("Crocin")));
    }

    #[test]
    fn home_remedies_are_capped() {
        let response = assess(&ctx("cough cold fever stomach headache"), UrgencyLevel::Medium);
        let remedy_count = response
            .recommendations
            .iter()
            .filter(|r| {
                HOME_REMEDIES
                    .iter()
                    .flat_map(|(_, items)| items.iter())
                    .any(|item| item == &r.as_str())
            })
            .count();
        assert!(remedy_count <= MAX_HOME_REMEDIES);
    }

    #[test]
    fn unknown_symptoms_get_generic_advice_without_caveat() {
        let response = assess(&ctx("feeling strange"), UrgencyLevel::Medium);
        assert_eq!(response.recommendations.len(), 2);
        assert!(!response.recommendations.contains(&MEDICATION_CAVEAT.to_string()));
    }

    #[test]
    fn treatment_is_terminal() {
        let response = assess(&ctx("fever"), UrgencyLevel::Medium);
        assert_eq!(response.next_agent, None);
    }
}
