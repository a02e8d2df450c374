//! Row-level value redaction for log output.
//!
//! Patient rows carry names, birth dates, emails and phone numbers. Values
//! taken from source rows only reach the logs when explicitly enabled.

use std::sync::atomic::{AtomicBool, Ordering};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when row-level logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Enables or disables logging of row values for the whole process.
pub fn set_log_data(enable: bool) {
    LOG_DATA_ENABLED.store(enable, Ordering::Release);
}

/// Returns true if row-level logging is explicitly enabled.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Acquire)
}

/// Returns the input value when row logging is enabled, otherwise a redacted token.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redaction_follows_switch() {
        set_log_data(false);
        assert_eq!(redact_value("ana@example.com"), REDACTED_VALUE);
        set_log_data(true);
        assert_eq!(redact_value("ana@example.com"), "ana@example.com");
        set_log_data(false);
    }
}
