//! Tracing setup. The chat view owns the terminal, so nothing is logged to the
//! console; `--debug` writes to a daily-rolling log file filtered by
//! `RUST_LOG`, else the resolved level.

use std::path::{Path, PathBuf};

use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, fmt::MakeWriter, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Caps for chatty HTTP dependencies, appended to every level.
const QUIET_DEPS: &str = "hyper=warn,hyper_util=warn,rustls=warn,reqwest=warn";

/// Log directory: the configured one, else `~/.faq-chat/logs`, else `./logs`.
pub fn log_dir(configured: Option<&Path>) -> PathBuf {
    configured
        .map(Path::to_path_buf)
        .or_else(|| faq_chat_client::config::app_dir().map(|d| d.join("logs")))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Filter for `level` (e.g. `warn`, `faq_chat_tui=debug`) with dependencies quieted.
pub fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("{level},{QUIET_DEPS}"))
}

/// Plain-text file layer.
fn file_layer<S, W>(filter: EnvFilter, writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false)
        .with_filter(filter)
}

/// Install the global subscriber when `debug_dir` is set. The returned guard
/// must outlive the program so buffered file writes are flushed on exit.
pub fn init(level: &str, debug_dir: Option<PathBuf>) -> anyhow::Result<Option<WorkerGuard>> {
    let Some(dir) = debug_dir else {
        return Ok(None);
    };

    std::fs::create_dir_all(&dir)?;
    let appender = tracing_appender::rolling::daily(&dir, "debug.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(level));
    tracing_subscriber::registry()
        .with(file_layer(filter, writer))
        .try_init()?;
    Ok(Some(guard))
}
