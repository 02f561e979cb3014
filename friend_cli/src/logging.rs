//! Logging setup for the binary.
//!
//! Diagnostics go to stderr so that command output on stdout stays clean.

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable that forces quiet mode when set to `1` or `true`.
pub const QUIET_ENV: &str = "FRIEND_CLI_QUIET";

/// Pick the log level from the command line flags. Quiet wins over verbose.
pub fn log_level(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Whether the quiet environment variable is set.
pub fn quiet_from_env() -> bool {
    std::env::var(QUIET_ENV)
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}

/// Install the global subscriber. `RUST_LOG` directives override `level`.
pub fn init(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
