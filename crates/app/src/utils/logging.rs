//! Telemetry bootstrap and command execution logging

use std::time::Duration;

use playerlog_domain::Error;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing with env-filter support and load `.env` overrides.
///
/// Called once by the UI shell at startup. Safe to call again; subsequent
/// calls are no-ops.
pub fn init_telemetry() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init so tests and repeated shell restarts don't panic on the
    // global subscriber already being set.
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();

    // Logging first so the .env outcome is visible.
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        // Running without a .env file is the normal case.
        Err(_) => {}
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"profile::save_profile"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// The helper keeps the command wrappers concise and the log shape uniform.
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert an [`Error`] into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &Error) -> &'static str {
    match error {
        Error::Database(_) => "database",
        Error::Config(_) => "config",
        Error::Network(_) => "network",
        Error::Auth(_) => "auth",
        Error::Session(_) => "session",
        Error::NotFound(_) => "not_found",
        Error::InvalidInput(_) => "invalid_input",
        Error::Internal(_) => "internal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_labels_are_stable() {
        assert_eq!(error_label(&Error::Auth("x".into())), "auth");
        assert_eq!(error_label(&Error::Session("x".into())), "session");
        assert_eq!(error_label(&Error::Database("x".into())), "database");
    }
}
