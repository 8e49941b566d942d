//! Logging bootstrap for the binary.
//!
//! Logs go to stderr so they never mix with command output. `RUST_LOG`, when
//! set, takes precedence over the level chosen from the flags.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Starts the global logger. Keep the handle alive until exit.
pub fn init_logging(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
}
