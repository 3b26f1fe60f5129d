//! asa-analysis: the slice compliance engine.
//!
//! - `slice`: slice layout, contract document model, slice discovery
//! - `parsers`: tree-sitter import extraction for governed sources
//! - `checks`: structure, contract, size budget, and import checks plus the orchestrator
//! - `project`: runs the orchestrator across every slice of a project
//! - `reporters`: console and JSON renderings of verdicts

pub mod checks;
pub mod parsers;
pub mod project;
pub mod reporters;
pub mod slice;

pub use checks::{CheckOrchestrator, CheckResult, CheckStatus, OverallStatus, Verdict};
pub use project::{ProjectLintOptions, ProjectLinter, ProjectReport};
pub use slice::{ContractDocument, SliceLayout, SliceRef};
