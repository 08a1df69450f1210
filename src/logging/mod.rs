pub mod config;
pub mod layers;

pub use config::LoggingConfig;
pub use layers::console::ConsoleOutput;

use crate::logging::layers::{console, file};
use crate::Result;
use anyhow::{anyhow, Context};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Filter applied by `--verbose` when `RUST_LOG` is unset.
const VERBOSE_LEVEL: &str = "debug";

/// Keeps the non-blocking file writer flushing until the command ends.
pub struct LoggingGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Pick the filter: `RUST_LOG` first, then `--verbose`, then the configured level.
fn build_filter(config: &LoggingConfig, verbose: bool) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| {
            if verbose {
                EnvFilter::try_new(VERBOSE_LEVEL)
            } else {
                EnvFilter::try_new(&config.default_level)
            }
        })
        .context("failed to configure tracing level")
}

/// Initialize the logging framework.
///
/// Reads the `[logging]` table of the config file (see [`LoggingConfig::load`]),
/// then installs a registry with a console sink and an optional file sink.
/// Errors when invoked more than once per process.
pub fn init(config_path: Option<&Path>, verbose: bool) -> Result<LoggingGuard> {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let config = LoggingConfig::load(config_path)?;
    let env_filter = build_filter(&config, verbose)?;
    let log_file_path = file::log_file_path(&config)?;

    type FileSubscriber = file::FileLayerStack<Registry>;

    let (file_layer, file_guard) = file::file_layer::<Registry>(log_file_path.as_deref())?;
    let console_layer = console::console_layer::<FileSubscriber>(config.console_output);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(env_filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::debug!(
        level = %config.default_level,
        console = %config.console_output,
        "logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

#[cfg(test)]
/// Reset the initialization guard so tests can reconfigure logging multiple times.
pub fn reset_for_tests() {
    LOGGER_INITIALIZED.store(false, Ordering::SeqCst);
}
