use anyhow::anyhow;
use tracing::info;

use crate::ai::deepseek::DeepSeekProvider;
use crate::ai::error::AiError;
use crate::ai::mock::MockProvider;
use crate::ai::types::{CompletionResponse, PromptRequest};
use crate::settings::config::{ProviderConfig, Settings};

/// Environment variable consulted when the settings file carries no API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// A chat-completion backend. One call per user turn; implementations never
/// retry and report every failure as `AiError::ExternalService`.
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn complete(&self, request: PromptRequest) -> Result<CompletionResponse, AiError>;
}

/// Build the provider selected in settings. Fails with a configuration error
/// when the DeepSeek credential is missing, which callers treat as fatal
/// before any interaction starts.
pub fn create_provider(settings: &Settings) -> Result<Box<dyn CompletionProvider>, AiError> {
    match &settings.provider {
        ProviderConfig::DeepSeek {
            api_key,
            base_url,
            model,
            temperature,
        } => {
            let api_key = resolve_api_key(api_key.as_deref())?;
            info!(model = %model, base_url = %base_url, "Using DeepSeek provider");
            Ok(Box::new(DeepSeekProvider::new(
                api_key,
                base_url.clone(),
                model.clone(),
                *temperature,
            )))
        }
        ProviderConfig::Mock { behavior } => {
            info!(?behavior, "Using mock provider");
            Ok(Box::new(MockProvider::new(behavior.clone())))
        }
    }
}

/// Settings value first, then the environment. Blank values count as unset.
fn resolve_api_key(configured: Option<&str>) -> Result<String, AiError> {
    if let Some(key) = configured {
        if !key.trim().is_empty() {
            return Ok(key.to_string());
        }
    }

    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(AiError::Configuration(anyhow!(
            "未找到 API 密钥。请在设置文件中配置 api_key，或设置 {API_KEY_ENV} 环境变量"
        ))),
    }
}
