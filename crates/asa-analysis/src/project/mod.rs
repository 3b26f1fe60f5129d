//! Project runner: discovers every slice under a root and lints each one.

pub mod runner;
pub mod summary;

pub use runner::{ProjectLintOptions, ProjectLinter, ProjectReport, SliceVerdict};
pub use summary::LintSummary;
