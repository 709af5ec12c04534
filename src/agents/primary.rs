//! Primary consultation agent: first contact, routes the turn.

use crate::emergency::EmergencyScan;
use crate::lexicon::terms::{DEFAULT_SPECIALIST, SPECIALIZATIONS};
use crate::types::{AgentResponse, AgentRole, PatientContext, UrgencyLevel};

const CONFIDENCE: f32 = 0.85;

/// First-contact triage. Red-flag input goes straight to the emergency
/// agent; everything else continues to diagnostics.
pub fn assess(ctx: &PatientContext, scan: &EmergencyScan) -> AgentResponse {
    if scan.is_critical() {
        return AgentResponse {
            role: AgentRole::Primary,
            assessment: format!(
                "Red-flag symptoms detected ({}). Escalating for emergency evaluation.",
                scan.flags.join(", ")
            ),
            recommendations: vec![
                "Do not wait for further questions".to_string(),
                "Keep the patient calm and seated".to_string(),
            ],
            urgency: UrgencyLevel::Critical,
            next_agent: Some(AgentRole::Emergency),
            confidence: CONFIDENCE,
            regional_note: Some("108 is India's free emergency ambulance number".to_string()),
        };
    }

    let specialist = SPECIALIZATIONS
        .iter()
        .find(|(patterns, _)| {
            patterns
                .split('|')
                .any(|p| ctx.normalized_input.contains(p))
        })
        .map(|(_, s)| *s)
        .unwrap_or(DEFAULT_SPECIALIST);

    AgentResponse {
        role: AgentRole::Primary,
        assessment: format!(
            "Initial consultation recorded: \"{}\". No immediate red flags; proceeding to symptom analysis.",
            ctx.normalized_input
        ),
        recommendations: vec![
            format!("Likely specialist: {specialist}"),
            "Gather symptom duration and severity".to_string(),
        ],
        urgency: scan.level,
        next_agent: Some(AgentRole::Diagnostic),
        confidence: CONFIDENCE,
        regional_note: None,
    }
}
