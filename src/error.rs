use thiserror::Error;

/// Errors produced by the triage pipeline.
///
/// The detection, routing and scoring components never fail: ambiguous
/// language resolves to a best guess and unrecognized symptoms degrade to
/// general-consultation defaults. The only real failure mode is the external
/// completion service, and the orchestrator recovers from it with the
/// deterministic template fallback.
#[derive(Error, Debug)]
pub enum TriageError {
    /// The external text-completion call failed or timed out.
    #[error("completion service unavailable: {0}")]
    CompletionUnavailable(String),

    /// The caller handed the orchestrator something it cannot work with.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TriageError>;
