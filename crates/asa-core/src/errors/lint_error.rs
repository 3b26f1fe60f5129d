//! Top-level error for a lint run.

use super::error_code::{self, AsaErrorCode};
use super::{ConfigError, ScanError};

/// Errors that stop a lint run before any verdict is produced.
/// Per-slice problems never surface here; they become findings.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown report format: {0}")]
    UnknownFormat(String),

    #[error("Report error: {0}")]
    Report(String),
}

impl AsaErrorCode for LintError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scan(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::UnknownFormat(_) | Self::Report(_) => error_code::REPORT_ERROR,
        }
    }
}
