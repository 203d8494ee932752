use tracing::{debug, warn};

use crate::ai::provider::CompletionProvider;
use crate::ai::types::TokenUsage;
use crate::chat::turn::Turn;
use crate::prompt::{build_prompt_request, StylePreference};

/// Greeting seeded as the first assistant turn of every session.
pub const GREETING: &str =
    "您好！我是英文表达参考助手，请输入中文内容，我会为您提供多种情景的英文表达参考。";

/// Prefix of the assistant turn synthesized when a completion call fails.
pub const ERROR_REPLY_PREFIX: &str = "生成表达时出现错误，请重试";

/// In-memory conversation state for one run: the ordered transcript plus the
/// active style preference. Owned by the frontend and passed to handlers
/// explicitly; turns are append-only and everything is dropped when the
/// session ends.
pub struct ChatSession {
    turns: Vec<Turn>,
    style: StylePreference,
}

impl ChatSession {
    pub fn new(style: StylePreference) -> Self {
        Self {
            turns: vec![Turn::assistant(GREETING)],
            style,
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn style(&self) -> StylePreference {
        self.style
    }

    /// Switch the active style. Returns false when the selection matches the
    /// current style, so callers can skip the confirmation message.
    pub fn set_style(&mut self, style: StylePreference) -> bool {
        if self.style == style {
            return false;
        }
        self.style = style;
        true
    }

    /// Drop the transcript and reseed the greeting. The style selection
    /// survives the reset.
    pub fn clear(&mut self) {
        self.turns = vec![Turn::assistant(GREETING)];
    }
}

/// Outcome of one submission. The reply turn has already been appended to
/// the session; `error` carries the failure text when the reply is the
/// synthesized error message.
#[derive(Debug)]
pub struct TurnOutcome {
    pub reply: Turn,
    pub usage: Option<TokenUsage>,
    pub error: Option<String>,
}

/// Process one user input: append the user turn, run a single completion
/// call with the active style, and append exactly one assistant turn - the
/// model reply, or the fixed error message when the call fails. Failures
/// never propagate; the session stays usable and the next submission is
/// handled normally.
pub async fn submit_user_turn(
    session: &mut ChatSession,
    provider: &dyn CompletionProvider,
    input: &str,
) -> TurnOutcome {
    session.append(Turn::user(input));

    let request = build_prompt_request(session.style(), input);
    debug!(style = %session.style(), chars = input.chars().count(), "Submitting user turn");

    match provider.complete(request).await {
        Ok(response) => {
            let reply = Turn::assistant(response.content);
            session.append(reply.clone());
            TurnOutcome {
                reply,
                usage: response.usage,
                error: None,
            }
        }
        Err(e) => {
            warn!(?e, "Completion call failed");
            let detail = e.detail();
            let reply = Turn::assistant(format!("{ERROR_REPLY_PREFIX}: {detail}"));
            session.append(reply.clone());
            TurnOutcome {
                reply,
                usage: None,
                error: Some(detail),
            }
        }
    }
}
