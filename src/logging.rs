//! File-based logging for the controller core.
//!
//! The core is embedded under a UI shell that owns the terminal, so logs go
//! to a rolling file instead of stdout.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_DIR: &str = ".logs";
const LOG_FILE_PREFIX: &str = "tunebridge";

/// Initialize the logging system.
///
/// Logs are written to `.logs/tunebridge.YYYY-MM-DD.log` with daily
/// rotation, through a non-blocking writer so the async runtime never stalls
/// on log IO. The log level can be controlled via the `RUST_LOG` environment
/// variable; the default keeps this crate at DEBUG and everything else at
/// WARN.
///
/// The returned guard flushes buffered log lines on drop; the embedding
/// shell must keep it alive for the lifetime of the process.
pub fn init_logging() -> anyhow::Result<WorkerGuard> {
    let log_dir = Path::new(LOG_DIR);
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tunebridge=debug,warn"));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI colors in log files
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Logging initialized - logs written to {}/", LOG_DIR);

    Ok(guard)
}
