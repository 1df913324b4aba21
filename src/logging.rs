//! Logging setup
//!
//! Installs a `tracing` subscriber filtered by `RUST_LOG` (default `info`).
//! When `APP_PERMS_LOG_DIR` is set, output also goes to a daily rotated file
//! in that directory.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable naming the log directory
pub const LOG_DIR_ENV: &str = "APP_PERMS_LOG_DIR";

const LOG_FILE_PREFIX: &str = "app-perms.log";

/// Initialize the global subscriber
///
/// Keep the returned guard alive for the life of the program so buffered
/// file output is flushed.
pub fn init_logging() -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match std::env::var_os(LOG_DIR_ENV) {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
