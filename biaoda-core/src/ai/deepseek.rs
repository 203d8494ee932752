use anyhow::anyhow;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ai::error::AiError;
use crate::ai::provider::CompletionProvider;
use crate::ai::types::{CompletionResponse, PromptRequest, TokenUsage};

/// DeepSeek's OpenAI-compatible chat completion client. One request per
/// call, no retries, no explicit timeout beyond the transport defaults.
#[derive(Clone)]
pub struct DeepSeekProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
}

impl DeepSeekProvider {
    pub fn new(api_key: String, base_url: String, model: String, temperature: f32) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature,
        }
    }

    /// Every call sends exactly two messages: the styled system instruction
    /// and the current user input. Prior turns are display-only and never go
    /// on the wire.
    fn build_chat_request(&self, request: PromptRequest) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system_instruction,
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.user_message,
                },
            ],
            temperature: self.temperature,
            stream: false,
        }
    }
}

#[async_trait::async_trait]
impl CompletionProvider for DeepSeekProvider {
    fn name(&self) -> &'static str {
        "deepseek"
    }

    async fn complete(&self, request: PromptRequest) -> Result<CompletionResponse, AiError> {
        let chat_request = self.build_chat_request(request);

        debug!(model = %self.model, "Sending DeepSeek chat completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                warn!(?e, "DeepSeek API call failed");
                AiError::ExternalService(anyhow!("Network error: {e}"))
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AiError::ExternalService(anyhow!("Failed to read response: {e}")))?;

        if !status.is_success() {
            warn!(?status, ?response_text, "DeepSeek API returned error");
            return Err(AiError::ExternalService(anyhow!(
                "DeepSeek API error {status}: {response_text}"
            )));
        }

        let chat_response: ChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            AiError::ExternalService(anyhow!(
                "Failed to parse DeepSeek response: {e} - Response: {response_text}"
            ))
        })?;

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AiError::ExternalService(anyhow!("No choices in response")))?;

        let usage = chat_response.usage.map(|u| TokenUsage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        debug!(
            content_chars = choice.message.content.chars().count(),
            "DeepSeek completion received"
        );

        Ok(CompletionResponse {
            content: choice.message.content,
            usage,
        })
    }
}

// DeepSeek API types (OpenAI-compatible subset)

#[derive(Debug, Serialize, Deserialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}
