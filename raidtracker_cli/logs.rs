use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Config;

/// Sets up logging for the binary.
///
/// Logs go to stderr, stdout is reserved for the JSON report. When a log directory is
/// configured, a daily rotating file in that directory receives the same events.
///
/// Log levels are controlled by `RUST_LOG`, defaulting to `warn` for everything and
/// `info` for this binary. The returned guard must stay alive for the file writer to flush.
pub fn setup_logging(config: &Config) -> Option<WorkerGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "raidtracker.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let default_filter = "warn,raidtracker_cli=info";
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
