//! Turn orchestration: the full detect-assess-respond pipeline.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::agents;
use crate::completion::{
    CompletionClient, CompletionRequest, DEFAULT_COMPLETION_TIMEOUT, Message, complete_with_timeout,
};
use crate::emergency;
use crate::error::{Result, TriageError};
use crate::language::{self, LanguageDetectionResult};
use crate::lexicon::templates;
use crate::normalize::normalize;
use crate::prompt::PromptBuilder;
use crate::respond;
use crate::risk;
use crate::types::{AgentResponse, AgentRole, PatientContext, RiskAssessment, UrgencyLevel};

/// One patient turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriageTurn {
    pub message: String,
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Prior conversation, oldest first.
    #[serde(default)]
    pub history: Vec<Message>,
    /// Base64 image attachment, if any.
    pub image: Option<String>,
}

impl TriageTurn {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Everything the pipeline concluded for one turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageReply {
    /// Final text shown to the patient, always in their language.
    pub text: String,
    pub detection: LanguageDetectionResult,
    pub agent_path: Vec<AgentRole>,
    pub responses: Vec<AgentResponse>,
    pub risk: RiskAssessment,
    pub urgency: UrgencyLevel,
    pub is_emergency: bool,
}

/// The triage pipeline. Works fully offline; an optional completion client
/// upgrades the deterministic template replies to model-phrased ones.
pub struct TriagePipeline {
    completion: Option<Arc<dyn CompletionClient>>,
    timeout: Duration,
}

impl Default for TriagePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl TriagePipeline {
    pub fn new() -> Self {
        Self {
            completion: None,
            timeout: DEFAULT_COMPLETION_TIMEOUT,
        }
    }

    pub fn with_completion(mut self, client: Arc<dyn CompletionClient>) -> Self {
        self.completion = Some(client);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run one full turn. Fails only on empty input; completion failures
    /// degrade to template replies instead of erroring.
    pub async fn respond(&self, turn: &TriageTurn) -> Result<TriageReply> {
        if turn.message.trim().is_empty() {
            return Err(TriageError::InvalidInput("empty message".to_string()));
        }

        let detection = language::detect(&turn.message);
        let normalized = normalize(&turn.message);
        let scan = emergency::scan(&normalized);

        info!(
            language = detection.language.tag(),
            confidence = detection.confidence,
            emergency_level = ?scan.level,
            "turn triaged"
        );

        let ctx = PatientContext {
            raw_input: turn.message.clone(),
            normalized_input: normalized,
            detection: detection.clone(),
            age: turn.age,
            gender: turn.gender.clone(),
            location: turn.location.clone(),
            allergies: turn.allergies.clone(),
            emergency_flags: scan.flags.clone(),
        };

        let responses = agents::run_pipeline(&ctx, &scan);
        let risk = risk::score(&ctx, &responses);
        let urgency = agents::final_urgency(&responses);

        let completion = match &self.completion {
            Some(client) => {
                let system_prompt = PromptBuilder::new(&ctx)
                    .with_risk(&risk)
                    .with_responses(&responses)
                    .build();
                let mut history = turn.history.clone();
                history.push(Message::user(&turn.message));
                let request = CompletionRequest {
                    system_prompt,
                    history,
                    image: turn.image.clone(),
                };
                match complete_with_timeout(client.as_ref(), &request, self.timeout).await {
                    Ok(text) => Some(text),
                    Err(err) => {
                        warn!(error = %err, "completion failed, using template reply");
                        None
                    }
                }
            }
            None => None,
        };

        let mut text = respond::select(completion.as_deref(), &detection, &turn.message);
        debug!(quality = ?respond::validate_quality(&text), "reply quality");
        if urgency == UrgencyLevel::Critical && !text.contains("108") {
            // Every emergency reply carries the ambulance number.
            text = format!(
                "{}\n\n{}",
                templates::emergency_message(detection.language),
                text
            );
        }

        Ok(TriageReply {
            text,
            detection,
            agent_path: responses.iter().map(|r| r.role).collect(),
            responses,
            risk,
            urgency,
            is_emergency: urgency == UrgencyLevel::Critical,
        })
    }

    /// Explicit imaging request. Image analysis is out of scope, so this
    /// returns the imaging agent's stub response directly.
    pub fn imaging_stub(&self, ctx: &PatientContext) -> AgentResponse {
        agents::imaging::assess(ctx, UrgencyLevel::Medium)
    }
}
