use thiserror::Error;

/// The two failure classes at the completion boundary. Configuration errors
/// are fatal at startup; external service errors are converted into a chat
/// reply and never end the session.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("配置错误: {0}")]
    Configuration(anyhow::Error),

    #[error("调用服务失败: {0}")]
    ExternalService(anyhow::Error),
}

impl AiError {
    /// The underlying failure text, without the classification prefix. This
    /// is what gets shown inside a synthesized chat reply.
    pub fn detail(&self) -> String {
        match self {
            Self::Configuration(e) | Self::ExternalService(e) => e.to_string(),
        }
    }
}
