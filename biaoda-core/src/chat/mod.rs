pub mod session;
pub mod turn;

#[cfg(test)]
mod tests;

pub use session::{submit_user_turn, ChatSession, TurnOutcome, ERROR_REPLY_PREFIX, GREETING};
pub use turn::{Role, Turn};
