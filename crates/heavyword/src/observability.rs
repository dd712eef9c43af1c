//! Logging setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Build the env filter from CLI flags and the configured log level.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces errors only and
/// each `-v` raises verbosity above the config file's level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the stderr subscriber. Call once at startup.
pub fn init(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
