use crate::ai::error::AiError;
use crate::ai::provider::CompletionProvider;
use crate::ai::types::{CompletionResponse, PromptRequest, TokenUsage};
use std::sync::{Arc, Mutex};

/// Canned reply in the assistant's output format, used by
/// `MockBehavior::Success`.
pub const MOCK_REPLY: &str = r#"⸻
今天天气很好
这句话的英文可以这样表达👇

✅ 口语版
The weather's really nice today.
（中文回译：今天天气真好。）

⸻

✅ 书面版
The weather is very pleasant today.
（中文回译：今天的天气十分宜人。）

⸻

✅ 情感版
What a beautiful day!
（中文回译：多美好的一天啊！）

⸻

💡 语法要点：
• weather 是不可数名词，前面用 the 特指当天的天气
• pleasant 比 nice 更书面

⸻

🪄 总结推荐：
✅ The weather's really nice today.
自然地道，适合大多数日常场景"#;

/// Mock behavior for the mock provider
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MockBehavior {
    /// Return the canned multi-style reply
    #[default]
    Success,
    /// Return a caller-supplied reply
    ReplyWith { content: String },
    /// Always fail the call
    AlwaysError,
    /// Fail the call with a specific message
    ErrorWith { message: String },
}

/// Mock completion provider for testing and offline runs
#[derive(Clone)]
pub struct MockProvider {
    behavior: Arc<Mutex<MockBehavior>>,
    call_count: Arc<Mutex<usize>>,
    captured_requests: Arc<Mutex<Vec<PromptRequest>>>,
}

impl MockProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            call_count: Arc::new(Mutex::new(0)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_behavior(&self, behavior: MockBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn get_captured_requests(&self) -> Vec<PromptRequest> {
        self.captured_requests.lock().unwrap().clone()
    }

    pub fn get_last_captured_request(&self) -> Option<PromptRequest> {
        self.captured_requests.lock().unwrap().last().cloned()
    }
}

#[async_trait::async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, request: PromptRequest) -> Result<CompletionResponse, AiError> {
        {
            let mut requests = self.captured_requests.lock().unwrap();
            requests.push(request);
        }

        {
            let mut count = self.call_count.lock().unwrap();
            *count += 1;
        }

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            MockBehavior::Success => Ok(CompletionResponse {
                content: MOCK_REPLY.to_string(),
                usage: Some(TokenUsage::new(10, 10)),
            }),
            MockBehavior::ReplyWith { content } => Ok(CompletionResponse {
                content,
                usage: Some(TokenUsage::new(10, 10)),
            }),
            MockBehavior::AlwaysError => Err(AiError::ExternalService(anyhow::anyhow!(
                "Mock completion error (always fails)"
            ))),
            MockBehavior::ErrorWith { message } => {
                Err(AiError::ExternalService(anyhow::anyhow!(message)))
            }
        }
    }
}
