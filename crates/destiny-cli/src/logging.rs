//! Logger bootstrap.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

const DEFAULT_LOG_SPEC: &str = "warn";

/// Starts stderr logging.
///
/// An explicit `spec` wins over `RUST_LOG`; with neither, only warnings and
/// errors are shown. The returned handle must be held for the life of the process.
pub fn init(spec: Option<&str>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = match spec {
        Some(spec) => Logger::try_with_str(spec)?,
        None => Logger::try_with_env_or_str(DEFAULT_LOG_SPEC)?,
    };
    logger.log_to_stderr().start()
}
