use anyhow::Result;
use biaoda_core::ai::provider::create_provider;
use biaoda_core::ai::CompletionProvider;
use biaoda_core::chat::session::{submit_user_turn, ChatSession, GREETING};
use biaoda_core::prompt::StylePreference;
use biaoda_core::settings::config::ProviderConfig;
use biaoda_core::settings::manager::SettingsManager;
use indicatif::ProgressBar;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use std::time::Duration;

use crate::banner::{print_startup_banner, BannerInfo};
use crate::commands::{handle_local_command, LocalCommandResult};
use crate::completer::BiaodaHelper;
use crate::formatter::Formatter;

pub struct App {
    session: ChatSession,
    provider: Box<dyn CompletionProvider>,
    formatter: Formatter,
    prompt: &'static str,
    copy_hint_shown: bool,
}

impl App {
    pub fn new(
        settings_path: Option<PathBuf>,
        style_override: Option<StylePreference>,
        plain: bool,
    ) -> Result<Self> {
        let settings_manager = match settings_path {
            Some(path) => SettingsManager::from_path(path)?,
            None => SettingsManager::new()?,
        };
        let settings = settings_manager.settings();

        // A missing API key is fatal here, before the prompt loop starts
        let provider = create_provider(&settings)?;

        let style = style_override.unwrap_or(settings.default_style);
        let use_colors = !plain;
        let formatter = Formatter::new(use_colors);

        print_startup_banner(
            &BannerInfo {
                version: env!("CARGO_PKG_VERSION").to_string(),
                model: settings.model_name().to_string(),
                style: style.label().to_string(),
                settings_path: settings_manager.path().display().to_string(),
            },
            use_colors,
        );

        if matches!(settings.provider, ProviderConfig::DeepSeek { .. }) {
            formatter.print_system("✅ API密钥加载成功");
        }

        let session = ChatSession::new(style);
        formatter.print_assistant(GREETING, &None);

        Ok(Self {
            session,
            provider,
            formatter,
            prompt: if use_colors { "\x1b[35m>\x1b[0m " } else { "> " },
            copy_hint_shown: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut rl: Editor<BiaodaHelper, DefaultHistory> = Editor::new()?;
        rl.set_helper(Some(BiaodaHelper));

        loop {
            let line = match rl.readline(self.prompt) {
                Ok(line) => line,
                Err(err) => match err {
                    ReadlineError::Interrupted => {
                        continue;
                    }
                    _ => break,
                },
            };

            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            match handle_local_command(&mut self.session, input) {
                LocalCommandResult::Handled { msg } => {
                    self.formatter.print_system(&msg);
                    continue;
                }
                LocalCommandResult::Exit => break,
                LocalCommandResult::Unhandled => (),
            }

            rl.add_history_entry(&line)?;
            self.submit(input).await;
        }

        println!("\n再见！");
        Ok(())
    }

    async fn submit(&mut self, input: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("正在生成多种英文表达参考...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let outcome = submit_user_turn(&mut self.session, self.provider.as_ref(), input).await;

        spinner.finish_and_clear();

        if outcome.error.is_some() {
            // The turn stays in the transcript; surface it the loud way
            self.formatter.print_error(&outcome.reply.content);
            return;
        }

        self.formatter
            .print_assistant(&outcome.reply.content, &outcome.usage);

        if !self.copy_hint_shown {
            self.formatter.print_system("💡 提示：可以复制您喜欢的表达方式");
            self.copy_hint_shown = true;
        }
    }
}
