use crate::ai::mock::MockBehavior;
use crate::prompt::StylePreference;
use serde::{Deserialize, Serialize};

/// Core application settings.
///
/// Stored as TOML in the settings file; every field has a default so a
/// missing or partial file still yields a working configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Completion provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Expression style applied to new sessions
    #[serde(default)]
    pub default_style: StylePreference,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            default_style: StylePreference::default(),
        }
    }
}

impl Settings {
    /// Model name shown in the banner
    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProviderConfig {
    #[serde(rename = "deepseek")]
    DeepSeek {
        /// Falls back to the OPENAI_API_KEY environment variable when unset
        #[serde(default)]
        api_key: Option<String>,
        #[serde(default = "default_base_url")]
        base_url: String,
        #[serde(default = "default_model")]
        model: String,
        #[serde(default = "default_temperature")]
        temperature: f32,
    },
    #[serde(rename = "mock")]
    Mock {
        #[serde(default)]
        behavior: MockBehavior,
    },
}

fn default_base_url() -> String {
    "https://api.deepseek.com".to_string()
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

// Slightly above deterministic so the variants don't all read the same.
fn default_temperature() -> f32 {
    0.3
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig::DeepSeek {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
        }
    }
}

impl ProviderConfig {
    pub fn model_name(&self) -> &str {
        match self {
            ProviderConfig::DeepSeek { model, .. } => model.as_str(),
            ProviderConfig::Mock { .. } => "mock",
        }
    }
}
