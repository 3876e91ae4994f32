//! faq-ask: one-shot FAQ query from the command line.
//! Reads config, sends a question (positional argument or first stdin line)
//! to the backend and prints the answer to stdout.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context};
use clap::Parser;
use faq_chat_client::{config, Client, Config, CONFIG_ENV};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "faq-ask", version, about = "Ask the FAQ chatbot a single question")]
struct Cli {
    /// Question to ask; read from stdin when omitted.
    question: Option<String>,

    /// Restrict the answer to one category (empty = all).
    #[arg(short, long, default_value = "")]
    category: String,

    /// Print the available categories and exit.
    #[arg(long, conflicts_with_all = ["question", "status"])]
    categories: bool,

    /// Print the backend's status banner and exit.
    #[arg(long, conflicts_with = "question")]
    status: bool,

    /// Write a starter config to the resolved config path and exit.
    #[arg(long, conflicts_with_all = ["question", "categories", "status"])]
    init: bool,

    /// Path to the config file.
    #[arg(long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn read_question(arg: Option<String>) -> anyhow::Result<String> {
    let question = match arg {
        Some(q) => q,
        None => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("failed to read question from stdin")?;
            line
        }
    };
    let question = question.trim().to_string();
    if question.is_empty() {
        bail!("no question provided (pass it as an argument or on stdin)");
    }
    Ok(question)
}

/// Write `Config::with_defaults()` to the resolved path; never overwrites.
fn init_config(override_path: Option<&Path>) -> anyhow::Result<PathBuf> {
    let (path, _) = config::resolve_config_path(override_path)?;
    if path.exists() {
        bail!("config file already exists: {}", path.display());
    }
    config::save(&path, &Config::with_defaults())?;
    Ok(path)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.init {
        let path = init_config(cli.config.as_deref())?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let cfg = config::load_resolved(cli.config.as_deref()).context("failed to load config")?;
    let client = Client::new(cfg.base_url())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.categories {
        let categories = client.categories().await.context("category fetch failed")?;
        for category in categories {
            writeln!(out, "{category}")?;
        }
        return Ok(());
    }

    if cli.status {
        let banner = client.status().await.context("status check failed")?;
        writeln!(out, "{banner}")?;
        return Ok(());
    }

    let question = read_question(cli.question)?;
    let answer = client
        .ask(&question, &cli.category)
        .await
        .context("query failed")?;
    writeln!(out, "{answer}")?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create runtime: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = rt.block_on(run(cli)) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
