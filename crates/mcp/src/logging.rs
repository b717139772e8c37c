//! Tracing subscriber setup shared by the Orderlens binaries.

use orderlens_core::config::{LogFormat, LoggingConfig};
use tracing::Level;

fn max_level(level: &str) -> Level {
    level.parse::<Level>().unwrap_or(Level::INFO)
}

/// Installs the global subscriber for `config`, writing to stderr.
///
/// stdout is reserved for the stdio transport and for CLI payloads. Returns
/// `false` when a subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let builder =
        tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(max_level(&config.level));

    let installed = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.is_ok()
}
