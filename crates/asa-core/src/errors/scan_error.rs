//! Slice discovery errors.

use std::path::PathBuf;

use super::error_code::{self, AsaErrorCode};

/// Errors that can occur while enumerating slices under a project root.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("No domains/ directory found under {path}")]
    DomainsNotFound { path: PathBuf },

    #[error("IO error scanning {path}: {message}")]
    Io { path: PathBuf, message: String },
}

impl AsaErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::SCAN_ERROR
    }
}
