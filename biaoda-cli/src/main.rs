use anyhow::Result;
use biaoda_core::prompt::StylePreference;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod app;
mod banner;
mod commands;
mod completer;
mod formatter;

use crate::app::App;

#[derive(Parser, Debug)]
#[command(name = "biaoda")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "英文表达参考助手 - 输入中文，获取多种情景的英文表达参考")]
struct Args {
    /// Load settings from a specific file instead of ~/.biaoda/settings.toml
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Expression style for this session, e.g. 口语交流 or conversational
    #[arg(long, value_name = "STYLE")]
    style: Option<String>,

    /// Disable ANSI colors in output
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    setup_tracing()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    let args = Args::parse();

    info!(
        "CLI startup: settings={:?}, style={:?}, plain={}",
        args.settings, args.style, args.plain
    );

    let style = args.style.as_deref().map(parse_style).transpose()?;

    let mut app = App::new(args.settings, style, args.plain)?;
    app.run().await
}

fn parse_style(input: &str) -> Result<StylePreference> {
    StylePreference::parse(input).ok_or_else(|| {
        let options = StylePreference::all()
            .iter()
            .map(|s| format!("{} ({})", s.label(), s.name()))
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::anyhow!("未知风格: {input}。可选风格: {options}")
    })
}

fn setup_tracing() -> Result<()> {
    use std::fs;
    use tracing_subscriber::fmt;

    // Create trace directory in user's home
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    let trace_dir = PathBuf::from(home).join(".biaoda").join("trace");
    fs::create_dir_all(&trace_dir)?;

    let log_file = trace_dir.join("biaoda.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)?;

    // Logs go to the file, keeping stdout clean for the conversation
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(EnvFilter::new("info"))
        .init();

    info!("Tracing initialized to {:?}", log_file);
    Ok(())
}
