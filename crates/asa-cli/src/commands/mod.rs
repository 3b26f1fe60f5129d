//! Command handlers.
//!
//! Parse/match CLI inputs here; the checks themselves live in `asa-analysis`.
//! Reports go to stdout, diagnostics to stderr.

pub mod lint;
pub mod list;

pub use lint::{lint_all, lint_slice};
pub use list::list_slices;

/// Printed when a project root has no `domains/` directory.
pub const NO_DOMAINS_MESSAGE: &str = "❌ No domains/ directory found";
