use biaoda_core::ai::TokenUsage;

/// ANSI output for the conversation loop. Falls back to tag-only prefixes
/// when colors are disabled so the transcript stays grep-friendly.
pub struct Formatter {
    use_colors: bool,
}

impl Formatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn print_system(&self, msg: &str) {
        if self.use_colors {
            println!("\x1b[33m[系统]\x1b[0m {msg}");
        } else {
            println!("[系统] {msg}");
        }
    }

    pub fn print_assistant(&self, msg: &str, usage: &Option<TokenUsage>) {
        let usage_text = usage
            .as_ref()
            .map(|u| format!(" (usage: {}/{})", u.input_tokens, u.output_tokens))
            .unwrap_or_default();

        if self.use_colors {
            println!("\x1b[32m[助手]\x1b[0m\x1b[90m{usage_text}\x1b[0m {msg}");
        } else {
            println!("[助手]{usage_text} {msg}");
        }
    }

    pub fn print_error(&self, msg: &str) {
        if self.use_colors {
            eprintln!("\x1b[31m[错误]\x1b[0m {msg}");
        } else {
            eprintln!("[错误] {msg}");
        }
    }
}
