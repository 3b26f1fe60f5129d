//! Tree-sitter import extraction for governed source files.

pub mod error_tolerant;
pub mod python;
pub mod traits;

pub use python::PythonImportExtractor;
pub use traits::{ImportExtractor, ImportSet};
