//! faq-chat: full-screen terminal chat with the FAQ chatbot.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use faq_chat_client::{config, Client, CONFIG_ENV};
use faq_chat_tui::logging;

#[derive(Parser, Debug)]
#[command(name = "faq-chat", version, about = "Chat with the FAQ chatbot in the terminal")]
struct Cli {
    /// Path to the config file.
    #[arg(long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Level for the `--debug` log file when RUST_LOG is unset (overrides `logging.level`).
    #[arg(long)]
    log_level: Option<String>,

    /// Write logs to a daily-rolling file under `logging.directory` (default `~/.faq-chat/logs`).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = config::load_resolved(cli.config.as_deref()).context("failed to load config")?;

    let level = cli
        .log_level
        .or_else(|| cfg.logging.level.clone())
        .unwrap_or_else(|| "info".to_string());
    let debug_dir = cli
        .debug
        .then(|| logging::log_dir(cfg.logging.directory.as_deref()));
    // Held until exit so buffered log lines are flushed.
    let _log_guard = logging::init(&level, debug_dir)?;

    let client = Client::new(cfg.base_url()).context("invalid backend URL")?;
    faq_chat_tui::run(client).await
}
