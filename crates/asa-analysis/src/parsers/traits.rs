//! ImportExtractor trait: the contract every language front end implements.

use std::collections::BTreeSet;
use std::path::Path;

use asa_core::errors::ParseError;

/// Module references imported by one file, ordered for stable reporting.
pub type ImportSet = BTreeSet<String>;

/// Extracts the modules a source file imports by walking its syntax tree.
pub trait ImportExtractor: Send + Sync {
    /// Language name, for logs.
    fn language(&self) -> &'static str;

    /// File extensions this extractor handles.
    fn extensions(&self) -> &[&str];

    /// Parse `source` and return the dotted names of every module it imports.
    ///
    /// Any file that does not parse cleanly is an error; callers decide
    /// whether that is fatal.
    fn extract_imports(&self, source: &[u8], path: &Path) -> Result<ImportSet, ParseError>;
}
