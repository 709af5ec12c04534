//! The specialist agent pipeline.
//!
//! Agents are pure functions over [`PatientContext`]: no shared mutable
//! state, no I/O. Each returns an [`AgentResponse`] whose `next_agent` field
//! drives a linear walk starting at the primary agent. Urgency is monotonic
//! along the walk: a later agent can raise it, never lower it.

use tracing::info;

use crate::emergency::EmergencyScan;
use crate::types::{AgentResponse, AgentRole, PatientContext, UrgencyLevel};

pub mod diagnostic;
pub mod emergency;
pub mod imaging;
pub mod primary;
pub mod treatment;

/// Hand-offs each role is allowed to make. The pipeline walker rejects
/// anything outside this table.
pub fn successors(role: AgentRole) -> &'static [AgentRole] {
    match role {
        AgentRole::Primary => &[AgentRole::Diagnostic, AgentRole::Emergency],
        AgentRole::Diagnostic => &[AgentRole::Emergency, AgentRole::Treatment],
        AgentRole::Emergency => &[AgentRole::Treatment],
        AgentRole::Treatment => &[],
        AgentRole::Imaging => &[],
    }
}

/// Walk the agent pipeline for one turn, starting at the primary agent.
///
/// Returns the responses in visit order. The walk visits each role at most
/// once and enforces urgency monotonicity across responses.
pub fn run_pipeline(ctx: &PatientContext, scan: &EmergencyScan) -> Vec<AgentResponse> {
    let mut responses = Vec::new();
    let mut visited = Vec::new();
    let mut urgency = scan.level;
    let mut current = Some(AgentRole::Primary);

    while let Some(role) = current {
        if visited.contains(&role) {
            break;
        }
        visited.push(role);

        let mut response = match role {
            AgentRole::Primary => primary::assess(ctx, scan),
            AgentRole::Diagnostic => diagnostic::assess(ctx, urgency),
            AgentRole::Emergency => emergency::assess(ctx, urgency),
            AgentRole::Treatment => treatment::assess(ctx, urgency),
            AgentRole::Imaging => imaging::assess(ctx, urgency),
        };

        response.urgency = response.urgency.max(urgency);
        urgency = response.urgency;

        current = response
            .next_agent
            .filter(|next| successors(role).contains(next));

        info!(
            agent = role.label(),
            urgency = ?response.urgency,
            next = ?current.map(AgentRole::label),
            "agent stage complete"
        );
        responses.push(response);
    }

    responses
}

/// Final urgency after the walk: the maximum any agent reported.
pub fn final_urgency(responses: &[AgentResponse]) -> UrgencyLevel {
    responses
        .iter()
        .map(|r| r.urgency)
        .max()
        .unwrap_or(UrgencyLevel::Medium)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emergency;
    use crate::language::{Language, LanguageDetectionResult};
    use crate::normalize::normalize;

    fn ctx(input: &str) -> PatientContext {
        let normalized = normalize(input);
        PatientContext {
            raw_input: input.to_string(),
            normalized_input: normalized,
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

    fn path(responses: &[AgentResponse]) -> Vec<AgentRole> {
        responses.iter().map(|r| r.role).collect()
    }

    #[test]
    fn routine_complaint_walks_primary_diagnostic_treatment() {
        let context = ctx("I have a mild headache since yesterday");
        let scan = emergency::scan(&context.normalized_input);
        let responses = run_pipeline(&context, &scan);
        assert_eq!(
            path(&responses),
            vec![AgentRole::Primary, AgentRole::Diagnostic, AgentRole::Treatment]
        );
    }

    #[test]
    fn critical_complaint_short_circuits_to_emergency() {
        let mut context = ctx("severe chest pain and difficulty breathing");
        let scan = emergency::scan(&context.normalized_input);
        context.emergency_flags = scan.flags.clone();
        let responses = run_pipeline(&context, &scan);
        assert_eq!(path(&responses), vec![AgentRole::Primary, AgentRole::Emergency]);
        assert_eq!(final_urgency(&responses), UrgencyLevel::Critical);
    }

    #[test]
    fn urgency_never_decreases_along_the_walk() {
        let context = ctx("high fever and severe pain in the stomach");
        let scan = emergency::scan(&context.normalized_input);
        let responses = run_pipeline(&context, &scan);
        let mut last = UrgencyLevel::Low;
        for response in &responses {
            assert!(response.urgency >= last);
            last = response.urgency;
        }
    }

    #[test]
    fn successor_table_is_acyclic_from_primary() {
        // Treatment and imaging are terminal.
        assert!(successors(AgentRole::Treatment).is_empty());
        assert!(successors(AgentRole::Imaging).is_empty());
    }
}
