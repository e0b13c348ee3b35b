//! Logger bootstrap.
//!
//! # Invariants
//! - Initialization happens at most once per process and never panics.
//! - Repeating the call with the same level is a no-op; a different level is rejected.

use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;
use thiserror::Error;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

/// Why [`init_logging`] refused to start a logger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggingError {
    /// The level is not one of `trace`, `debug`, `info`, `warn`, `error`.
    #[error("unsupported log level `{0}`")]
    UnsupportedLevel(String),
    /// A logger is already running with another level.
    #[error("logging already initialized with level `{current}`; refusing to switch to `{requested}`")]
    LevelConflict {
        /// Level of the running logger.
        current: &'static str,
        /// Level passed to the rejected call.
        requested: &'static str,
    },
    /// The logger backend failed to start.
    #[error("failed to start logger: {0}")]
    Backend(String),
}

/// Starts a stderr logger at `level`.
pub fn init_logging(level: &str) -> Result<(), LoggingError> {
    let level = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        return if state.level == level {
            Ok(())
        } else {
            Err(LoggingError::LevelConflict {
                current: state.level,
                requested: level,
            })
        };
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, LoggingError> {
        let logger = Logger::try_with_str(level)
            .map_err(|err| LoggingError::Backend(err.to_string()))?
            .log_to_stderr()
            .format_for_stderr(flexi_logger::detailed_format)
            .start()
            .map_err(|err| LoggingError::Backend(err.to_string()))?;

        info!(
            "event=logging_init module=logging status=ok level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level,
            _logger: logger,
        })
    })?;

    if state.level == level {
        Ok(())
    } else {
        Err(LoggingError::LevelConflict {
            current: state.level,
            requested: level,
        })
    }
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        _ => Err(LoggingError::UnsupportedLevel(level.to_string())),
    }
}
