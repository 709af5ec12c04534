//! Imaging agent. Image analysis is not wired up; this agent exists so
//! imaging requests get an explicit, honest answer instead of silence.

use crate::types::{AgentResponse, AgentRole, PatientContext, UrgencyLevel};

const CONFIDENCE: f32 = 0.70;

pub fn assess(_ctx: &PatientContext, _incoming: UrgencyLevel) -> AgentResponse {
    AgentResponse {
        role: AgentRole::Imaging,
        assessment: "Image review is not available in this consultation.".to_string(),
        recommendations: vec![
            "Show the report or scan to a doctor in person".to_string(),
            "Carry previous reports to the consultation".to_string(),
        ],
        urgency: UrgencyLevel::Low,
        next_agent: None,
        confidence: CONFIDENCE,
        regional_note: None,
    }
}
