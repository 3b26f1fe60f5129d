//! Contract document errors.

use std::path::PathBuf;

use super::error_code::{self, AsaErrorCode};

/// Errors that can occur while loading a slice contract document.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("Contract not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Contract unreadable at {path}: {message}")]
    Unreadable { path: PathBuf, message: String },
}

impl AsaErrorCode for ContractError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::CONTRACT_NOT_FOUND,
            Self::Unreadable { .. } => error_code::CONTRACT_UNREADABLE,
        }
    }
}
