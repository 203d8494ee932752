pub mod ai;
pub mod chat;
pub mod prompt;
pub mod settings;

// Convenience re-exports for frontends. Everything below is the surface
// other crates are expected to touch; the rest is public too but moves
// more freely.
pub use ai::provider::CompletionProvider;
pub use chat::{ChatSession, Turn};
pub use prompt::StylePreference;
pub use settings::{Settings, SettingsManager};
