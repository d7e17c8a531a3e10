//! Logging bootstrap
//!
//! Diagnostics go to stderr through `flexi_logger`; stdout is reserved for
//! command output.

use crate::error::{Result, TipcheckError};
use flexi_logger::{Logger, LoggerHandle};

/// Environment variable overriding the log specification (e.g. "debug")
pub const LOG_ENV: &str = "TIPCHECK_LOG";

/// Map `-v`/`-q` flags to a log level
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Start the logger. The returned handle must be kept alive for the run.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<LoggerHandle> {
    let spec = std::env::var(LOG_ENV).unwrap_or_else(|_| level_for(verbose, quiet).to_string());

    Logger::try_with_str(&spec)
        .map_err(|e| TipcheckError::Logging(format!("invalid log level `{}`: {}", spec, e)))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|e| TipcheckError::Logging(format!("failed to start logger: {}", e)))
}
