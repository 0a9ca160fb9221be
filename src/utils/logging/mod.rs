//! Logging utilities
//!
//! Installs the `tracing` subscriber used by the `pricing` binary and by anyone
//! embedding the engine who wants the crate's diagnostics.

pub mod types;

pub use types::{LogFormat, LogLevel};

use std::env;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Logging facade
pub struct LoggingUtils;

impl LoggingUtils {
    /// Install a global fmt subscriber.
    ///
    /// `RUST_LOG` wins over `log_level` when set. Calling this a second time is a
    /// no-op; the first installed subscriber stays in place.
    pub fn init_logger(log_level: Option<LogLevel>, format: LogFormat) {
        let level = Level::from(log_level.unwrap_or(LogLevel::Info));
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_writer(std::io::stderr);

        let installed = match format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Pretty => builder.try_init(),
        };

        if installed.is_err() {
            tracing::debug!("Global subscriber already installed, keeping it");
        }
    }

    pub fn get_log_level_from_env() -> LogLevel {
        env::var("PRICING_LOG_LEVEL")
            .unwrap_or_else(|_| "INFO".to_string())
            .parse()
            .unwrap_or(LogLevel::Info)
    }
}
