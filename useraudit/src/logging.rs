//! Logging initialization
//!
//! Console output is always enabled. When `USERAUDIT_LOG_DIR` is set, a
//! daily-rolling file is written there as well.

use crate::config::get_env_with_fallback;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "info";
const LOG_FILE_PREFIX: &str = "useraudit.log";

/// Build the filter from `USERAUDIT_LOG_LEVEL`, then `LOG_LEVEL`, then `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match get_env_with_fallback("USERAUDIT_LOG_LEVEL", "LOG_LEVEL") {
        Some(level) => EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
    }
}

/// Initialize the global tracing subscriber.
///
/// The returned guard must be kept alive for the file writer to flush.
pub fn init() -> Result<Option<WorkerGuard>, String> {
    let console = fmt::layer().with_target(true);

    match std::env::var("USERAUDIT_LOG_DIR").ok() {
        Some(dir) => {
            std::fs::create_dir_all(&dir)
                .map_err(|e| format!("Failed to create log directory '{}': {}", dir, e))?;
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(build_filter())
                .with(console)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()
                .map_err(|e| e.to_string())?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(build_filter())
                .with(console)
                .try_init()
                .map_err(|e| e.to_string())?;
            Ok(None)
        }
    }
}
