//! Completion client abstraction.
//!
//! The pipeline talks to a language model through [`CompletionClient`] and
//! treats every failure mode (error, timeout, missing client) the same way:
//! the turn falls back to deterministic templates. The optional `rig`
//! feature provides an OpenRouter-backed implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};

/// How long a completion call may take before the turn gives up on it.
pub const DEFAULT_COMPLETION_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// One completion call: built system prompt plus the conversation so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub history: Vec<Message>,
    /// Base64 image payload, when the patient attached one.
    pub image: Option<String>,
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// Run the completion under a timeout. A timeout surfaces as
/// [`TriageError::CompletionUnavailable`] so callers handle it like any
/// other completion failure.
pub async fn complete_with_timeout(
    client: &dyn CompletionClient,
    request: &CompletionRequest,
    timeout: Duration,
) -> Result<String> {
    match tokio::time::timeout(timeout, client.complete(request)).await {
        Ok(result) => result,
        Err(_) => Err(TriageError::CompletionUnavailable(format!(
            "completion timed out after {}s",
            timeout.as_secs()
        ))),
    }
}

#[cfg(feature = "rig")]
pub mod openrouter {
    //! OpenRouter-backed client via rig.

    use async_trait::async_trait;
    use rig::client::CompletionClient as _;
    use rig::completion::Prompt;
    use rig::providers::openrouter;

    use super::{CompletionClient, CompletionRequest, Role};
    use crate::error::{Result, TriageError};

    pub struct OpenRouterCompletion {
        client: openrouter::Client,
        model: String,
    }

    impl OpenRouterCompletion {
        pub fn new(api_key: &str, model: impl Into<String>) -> Self {
            Self {
                client: openrouter::Client::new(api_key),
                model: model.into(),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for OpenRouterCompletion {
        async fn complete(&self, request: &CompletionRequest) -> Result<String> {
            let agent = self
                .client
                .agent(&self.model)
                .preamble(&request.system_prompt)
                .build();

            // Fold the turn history into a single prompt; rig's prompt API
            // takes one user message.
            let mut prompt = String::new();
            for message in &request.history {
                let speaker = match message.role {
                    Role::User => "Patient",
                    Role::Assistant => "Doctor",
                };
                prompt.push_str(speaker);
                prompt.push_str(": ");
                prompt.push_str(&message.content);
                prompt.push('\n');
            }

            agent
                .prompt(prompt)
                .await
                .map_err(|e| TriageError::CompletionUnavailable(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SlowClient;

    #[async_trait]
    impl CompletionClient for SlowClient {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("too late".to_string())
        }
    }

    struct EchoClient;

    #[async_trait]
    impl CompletionClient for EchoClient {
        async fn complete(&self, request: &CompletionRequest) -> Result<String> {
            Ok(request.system_prompt.clone())
        }
    }

    fn request() -> CompletionRequest {
        CompletionRequest {
            system_prompt: "you are a doctor".to_string(),
            history: vec![Message::user("hello")],
            image: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_maps_to_completion_unavailable() {
        let err = complete_with_timeout(&SlowClient, &request(), Duration::from_secs(20))
            .await
            .unwrap_err();
        assert!(matches!(err, TriageError::CompletionUnavailable(_)));
    }

    #[tokio::test]
    async fn fast_client_completes() {
        let text = complete_with_timeout(&EchoClient, &request(), DEFAULT_COMPLETION_TIMEOUT)
            .await
            .unwrap();
        assert_eq!(text, "you are a doctor");
    }
}
