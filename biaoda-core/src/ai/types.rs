use serde::{Deserialize, Serialize};

/// One fully composed completion request: the styled system instruction plus
/// the user's raw input. Built fresh for every call and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub system_instruction: String,
    pub user_message: String,
}

/// The generated reply, plus token accounting when the service reports it.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: String,
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
        }
    }
}
