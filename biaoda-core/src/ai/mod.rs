pub mod deepseek;
pub mod error;
pub mod mock;
pub mod provider;
pub mod types;

pub use deepseek::DeepSeekProvider;
pub use error::AiError;
pub use provider::{create_provider, CompletionProvider};
pub use types::*;
