//! Emergency agent: confirms whether red-flag input is an active emergency.

use crate::lexicon::emergency::CRITICAL_SIGNS;
use crate::types::{AgentResponse, AgentRole, PatientContext, UrgencyLevel};

const CONFIDENCE_CRITICAL: f32 = 0.92;
const CONFIDENCE_MANAGEABLE: f32 = 0.75;

/// Re-check the input against the narrow critical-sign list. A confirmed
/// emergency terminates the pipeline with hospital-now instructions; a
/// false alarm is handed to the treatment agent at high urgency.
pub fn assess(ctx: &PatientContext, incoming: UrgencyLevel) -> AgentResponse {
    let confirmed: Vec<&str> = CRITICAL_SIGNS
        .iter()
        .filter(|sign| ctx.normalized_input.contains(*sign))
        .copied()
        .collect();

    if !confirmed.is_empty() {
        return AgentResponse {
            role: AgentRole::Emergency,
            assessment: format!(
                "EMERGENCY: critical signs confirmed ({}). Immediate medical attention required.",
                confirmed.join(", ")
            ),
            recommendations: vec![
                "Call 108 ambulance immediately".to_string(),
                "Go to the nearest emergency department".to_string(),
                "Do not drive yourself; have someone accompany you".to_string(),
            ],
            urgency: UrgencyLevel::Critical,
            next_agent: None,
            confidence: CONFIDENCE_CRITICAL,
            regional_note: Some(
                "Dial 108 for a free government ambulance anywhere in India".to_string(),
            ),
        };
    }

    AgentResponse {
        role: AgentRole::Emergency,
        assessment:
            "No active critical signs confirmed; symptoms appear manageable but need prompt care."
                .to_string(),
        recommendations: vec!["See a doctor within 24 hours".to_string()],
        urgency: incoming.max(UrgencyLevel::Medium),
        next_agent: Some(AgentRole::Treatment),
        confidence: CONFIDENCE_MANAGEABLE,
        regional_note: None,
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
    fn confirmed_critical_signs_terminate_the_pipeline() {
        let response = assess(&ctx("chest pain with sweating"), UrgencyLevel::Critical);
        assert_eq!(response.next_agent, None);
        assert_eq!(response.urgency, UrgencyLevel::Critical);
        assert!(response.recommendations.iter().any(|r| r.contains("108")));
        assert!(response.regional_note.as_deref().is_some_and(|n| n.contains("108")));
    }

    #[test]
    fn romanized_critical_sign_is_confirmed() {
        let response = assess(&ctx("saans lene mein problem hai"), UrgencyLevel::Critical);
        assert_eq!(response.next_agent, None);
    }

    #[test]
    fn false_alarm_hands_off_to_treatment() {
        let response = assess(&ctx("strong palpitations earlier, fine now"), UrgencyLevel::High);
        assert_eq!(response.next_agent, Some(AgentRole::Treatment));
        // Never lowers the incoming level.
        assert_eq!(response.urgency, UrgencyLevel::High);
    }
}
