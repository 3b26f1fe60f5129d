//! AsaErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a stable code string
/// alongside its human-readable message.
pub trait AsaErrorCode {
    /// Returns the error code string (e.g., "CONTRACT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONTRACT_NOT_FOUND: &str = "CONTRACT_NOT_FOUND";
pub const CONTRACT_UNREADABLE: &str = "CONTRACT_UNREADABLE";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
