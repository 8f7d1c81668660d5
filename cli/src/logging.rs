//! Log subscriber setup.
//!
//! Verbosity maps to a default filter; `RUST_LOG` overrides it. Logs go to
//! stderr so converted output on stdout stays clean.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Subscriber settings derived from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: &'static str,
    pub source_location: bool,
}

impl LoggingConfig {
    /// `-v` count to filter level: none is `warn`, then `info`, `debug`,
    /// and `trace` from three up.
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        Self {
            level,
            source_location: verbosity >= 2,
        }
    }
}

/// Installs the global subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<(), String> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| format!("failed to initialize logging: {e}"))
}
