//! Multilingual medical triage pipeline for Indian-language patient chat.
//!
//! The pipeline runs a deterministic core on every turn: language detection
//! over nine languages, symptom normalization, emergency red-flag scanning,
//! a walk through specialist agents and additive risk scoring. A language
//! model is optional; when it is absent, slow or low-quality, the turn
//! degrades to curated native-language templates instead of failing.
//!
//! ```no_run
//! use triage_flow::{TriagePipeline, TriageTurn};
//!
//! # async fn run() -> triage_flow::Result<()> {
//! let pipeline = TriagePipeline::new();
//! let reply = pipeline
//!     .respond(&TriageTurn::new("mujhe bukhar hai do din se"))
//!     .await?;
//! println!("{}", reply.text);
//! # Ok(())
//! # }
//! ```

pub mod agents;
pub mod completion;
pub mod emergency;
pub mod error;
pub mod language;
pub mod lexicon;
pub mod normalize;
pub mod prompt;
pub mod respond;
pub mod risk;
pub mod triage;
pub mod types;

pub use completion::{CompletionClient, CompletionRequest, Message, Role};
pub use emergency::EmergencyScan;
pub use error::{Result, TriageError};
pub use language::{Language, LanguageDetectionResult, detect};
pub use normalize::normalize;
pub use prompt::PromptBuilder;
pub use respond::{QualityLevel, validate_quality};
pub use triage::{TriagePipeline, TriageReply, TriageTurn};
pub use types::{
    AgentResponse, AgentRole, PatientContext, RiskAssessment, RiskBand, UrgencyLevel,
};
