//! Reporters: output formats for verdicts.
//!
//! Two formats: console (human-readable, default) and JSON.

pub mod console;
pub mod json;

use asa_core::constants::REPORT_FORMATS;

use crate::checks::Verdict;
use crate::project::ProjectReport;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    /// Report for a single slice.
    fn generate(&self, verdict: &Verdict) -> Result<String, String>;
    /// Report for a project-wide run.
    fn generate_project(&self, report: &ProjectReport) -> Result<String, String>;
}

/// Create a reporter by format name. `use_color` only affects the console format.
pub fn create_reporter(format: &str, use_color: bool) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(console::ConsoleReporter::new(use_color))),
        "json" => Some(Box::new(json::JsonReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &REPORT_FORMATS
}
