//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, AsaErrorCode};

/// Errors that can occur while extracting imports from a source file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Grammar unavailable for {language}: {message}")]
    GrammarUnavailable { language: String, message: String },

    #[error("{path} is not valid UTF-8")]
    InvalidEncoding { path: PathBuf },

    #[error("Tree-sitter produced no tree for {path}")]
    NoTree { path: PathBuf },

    #[error("{path} has {error_count} syntax error(s)")]
    SyntaxErrors { path: PathBuf, error_count: u32 },
}

impl AsaErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
