use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initializes logging for a component ("cli", "core", ...).
///
/// Output goes to daily-rolled files under `~/.refscope/logs`, named after
/// the component, so stdout stays clean for the rendered tree. `RUST_LOG`
/// overrides the default `info` filter. The returned guard flushes buffered
/// lines on drop; keep it alive for the life of the process.
pub fn init_logging(component: &str) -> WorkerGuard {
    let log_dir = log_dir();
    let _ = std::fs::create_dir_all(&log_dir);

    let appender = tracing_appender::rolling::daily(&log_dir, component);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
        .init();

    guard
}

fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".refscope")
        .join("logs")
}
