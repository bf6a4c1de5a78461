//! Process-level glue for the `sailthru` binary.
//!
//! Exit statuses, the stderr log subscriber, and the follow-up advice
//! printed when credentials or the config file cannot be found.

use sailthru_client::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

/// Exit statuses of the `sailthru` binary.
pub mod exit_code {
    use std::process::ExitCode;

    /// The command ran and its output was printed.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// No usable credentials, API URI or config file (exit code 1).
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// The command itself failed (exit code 2): the API was unreachable,
    /// answered with an empty body, or a JSON argument was malformed.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

const INIT_HINT: &str = "Run 'sailthru init' to write sailthru.toml, then fill in [api].";
const CREDENTIALS_HINT: &str = "Pass --api-key and --secret, or set them under [api].";

/// Returns the advice to show after a configuration error, if any.
///
/// A missing file points at `sailthru init`; missing credentials point
/// at the flags and config keys that supply them.
#[must_use]
pub fn config_hint(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::FileRead { .. } => Some(INIT_HINT),
        ConfigError::MissingRequired { field: f, .. }
            if *f == field::API_KEY || *f == field::SECRET =>
        {
            Some(CREDENTIALS_HINT)
        }
        _ => None,
    }
}

/// Prints [`config_hint`] for the error to stderr.
pub fn print_config_hint(error: &ConfigError) {
    if let Some(hint) = config_hint(error) {
        eprintln!("\n{hint}");
    }
}

/// Installs the log subscriber.
///
/// Logs go to stderr so stdout carries only command output. The level is
/// WARN, or DEBUG with `--verbose`; `RUST_LOG` overrides both.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
