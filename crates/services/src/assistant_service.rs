//! ChemBot, the chat-completion guidance proxy.
//!
//! The progression engine never calls this service; it is a sibling
//! collaborator the presentation layer may consult for supplementary
//! guidance. Its latency or failure must never block step or quiz progress.

use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::AssistantError;

/// System instructions sent with every guidance request.
const CHEMBOT_INSTRUCTIONS: &str = "You are ChemBot, an AI chemistry lab assistant. You help students with virtual chemistry experiments by:\n\n\
1. Providing clear, step-by-step guidance\n\
2. Explaining chemical concepts in simple terms\n\
3. Emphasizing safety protocols\n\
4. Encouraging scientific curiosity\n\
5. Answering questions about reactions, equipment, and procedures\n\n\
Always prioritize safety and accuracy. Keep responses concise but informative. Use encouraging language to motivate learning.";

/// Default cap on generated tokens per guidance reply.
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 200;

#[derive(Clone, Debug)]
pub struct AssistantConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl AssistantConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("CHEMLAB_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("CHEMLAB_AI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("CHEMLAB_AI_MODEL").unwrap_or_else(|_| "gpt-4o".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// One guidance request: the learner's message plus optional experiment
/// context (current step title, safety notes, etc.) spliced into the system
/// instructions.
#[derive(Clone, Debug)]
pub struct GuidanceRequest {
    pub prompt: String,
    pub context: Option<String>,
    pub max_output_tokens: u32,
}

impl GuidanceRequest {
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            context: None,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    fn system_message(&self) -> String {
        let context = self
            .context
            .as_deref()
            .unwrap_or("General chemistry lab assistance");
        format!("{CHEMBOT_INSTRUCTIONS}\n\nCurrent context: {context}")
    }
}

#[derive(Clone)]
pub struct AssistantService {
    client: Client,
    config: Option<AssistantConfig>,
}

impl AssistantService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(AssistantConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<AssistantConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Generate guidance text for a learner's message.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError` when the service is disabled, the request
    /// fails, or the response is empty.
    pub async fn guide(&self, request: GuidanceRequest) -> Result<String, AssistantError> {
        let config = self.config.as_ref().ok_or(AssistantError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system_message(),
                },
                ChatMessage {
                    role: "user",
                    content: request.prompt.clone(),
                },
            ],
            max_tokens: request.max_output_tokens,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AssistantError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AssistantError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_to_200_tokens_and_no_context() {
        let request = GuidanceRequest::new("Why is the foam hot?");
        assert_eq!(request.max_output_tokens, 200);
        assert!(request.context.is_none());
        assert!(
            request
                .system_message()
                .ends_with("Current context: General chemistry lab assistance")
        );
    }

    #[test]
    fn request_splices_context_into_system_message() {
        let request = GuidanceRequest::new("What now?")
            .with_context("Step 5: The Reaction")
            .with_max_output_tokens(50);

        assert_eq!(request.max_output_tokens, 50);
        assert!(
            request
                .system_message()
                .ends_with("Current context: Step 5: The Reaction")
        );
        assert!(request.system_message().starts_with("You are ChemBot"));
    }

    #[test]
    fn chat_request_serializes_expected_shape() {
        let payload = ChatRequest {
            model: "gpt-4o".into(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "instructions".into(),
                },
                ChatMessage {
                    role: "user",
                    content: "question".into(),
                },
            ],
            max_tokens: 200,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["max_tokens"], 200);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "question");
    }

    #[tokio::test]
    async fn disabled_service_reports_disabled() {
        let service = AssistantService::new(None);
        assert!(!service.enabled());

        let err = service
            .guide(GuidanceRequest::new("hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, AssistantError::Disabled));
    }
}
