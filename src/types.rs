//! Shared data types flowing between the pipeline stages.

use serde::{Deserialize, Serialize};

use crate::language::LanguageDetectionResult;

/// Everything the agents know about the patient for one turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientContext {
    pub raw_input: String,
    /// Lowercased input with colloquial terms rewritten to clinical ones.
    pub normalized_input: String,
    pub detection: LanguageDetectionResult,
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub allergies: Vec<String>,
    /// "category: phrase" strings produced by the emergency scan.
    pub emergency_flags: Vec<String>,
}

impl PatientContext {
    pub fn has_emergency_flags(&self) -> bool {
        !self.emergency_flags.is_empty()
    }
}

/// The five specialist roles. Each turn walks a linear path through these,
/// chosen by every agent's `next_agent` hand-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    Primary,
    Diagnostic,
    Emergency,
    Treatment,
    Imaging,
}

impl AgentRole {
    pub fn label(self) -> &'static str {
        match self {
            AgentRole::Primary => "primary",
            AgentRole::Diagnostic => "diagnostic",
            AgentRole::Emergency => "emergency",
            AgentRole::Treatment => "treatment",
            AgentRole::Imaging => "imaging",
        }
    }
}

/// Urgency ordering used across the pipeline. Later stages may raise the
/// level but never lower it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// One agent's contribution to the turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResponse {
    pub role: AgentRole,
    pub assessment: String,
    pub recommendations: Vec<String>,
    pub urgency: UrgencyLevel,
    /// Where the pipeline goes next; `None` terminates the walk.
    pub next_agent: Option<AgentRole>,
    pub confidence: f32,
    /// India-specific context for this assessment (108 ambulance, regional
    /// disease patterns, OTC brand availability), when the agent has one.
    pub regional_note: Option<String>,
}

/// Severity read off the patient's own wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

/// Structured symptom extraction produced by the diagnostic agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredSymptoms {
    pub primary_complaint: String,
    pub severity: Severity,
    /// Verbatim duration phrase ("3 days", "2 din", "१ हफ्ता"), if found.
    pub duration: Option<String>,
    pub associated: Vec<String>,
    pub specialist: String,
    pub differentials: Vec<String>,
}

/// Risk band derived from the deterministic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
    Critical,
}

/// What contributed points to the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCategory {
    Cardiac,
    Respiratory,
    Neurological,
    Bleeding,
    Seasonal,
    Age,
    Location,
}

impl IndicatorCategory {
    pub fn label(self) -> &'static str {
        match self {
            IndicatorCategory::Cardiac => "cardiac",
            IndicatorCategory::Respiratory => "respiratory",
            IndicatorCategory::Neurological => "neurological",
            IndicatorCategory::Bleeding => "bleeding",
            IndicatorCategory::Seasonal => "seasonal",
            IndicatorCategory::Age => "age",
            IndicatorCategory::Location => "location",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskIndicator {
    /// Stable identifier, e.g. "critical-cardiac".
    pub id: String,
    pub category: IndicatorCategory,
    /// Short name of the contributing factor.
    pub factor: String,
    pub description: String,
    pub points: u8,
    pub recommendation: String,
    pub regional_note: Option<String>,
    /// Agent whose assessment surfaced the factor; `None` when it came from
    /// the patient's own words or demographics.
    pub source_agent: Option<AgentRole>,
}

/// Deterministic risk assessment for one turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Raw additive score; unbounded.
    pub score: u8,
    /// Score capped for display.
    pub display_score: u8,
    pub band: RiskBand,
    pub indicators: Vec<RiskIndicator>,
    pub emergency_flags: Vec<String>,
    pub follow_up_timeline: String,
}

/// Verdict of the spam/quality filter over a completion output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpamFilterResult {
    pub is_spam: bool,
    pub score: f32,
    pub matched_categories: Vec<String>,
    /// Input with matched junk stripped and whitespace collapsed. For
    /// Indian-language input this is the input, byte for byte.
    pub filtered_text: String,
}
