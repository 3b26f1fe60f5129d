//! Console reporter: human-readable output with optional color codes.

use std::fmt::Write as _;

use crate::checks::{CheckStatus, OverallStatus, Verdict};
use crate::project::ProjectReport;
use super::Reporter;

const RULE_WIDTH: usize = 60;

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn status_symbol(&self, status: CheckStatus) -> &'static str {
        match status {
            CheckStatus::Ok => "✅",
            CheckStatus::Failed => "❌",
            CheckStatus::Warning => "⚠️",
        }
    }

    fn color_start(&self, status: CheckStatus) -> &'static str {
        if !self.use_color {
            return "";
        }
        match status {
            CheckStatus::Ok => "\x1b[32m",      // green
            CheckStatus::Failed => "\x1b[31m",  // red
            CheckStatus::Warning => "\x1b[33m", // yellow
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }

    fn overall_color(&self, status: OverallStatus) -> &'static str {
        match status {
            OverallStatus::Passed => self.color_start(CheckStatus::Ok),
            OverallStatus::Failed => self.color_start(CheckStatus::Failed),
        }
    }

    fn render_verdict(&self, verdict: &Verdict) -> String {
        let mut lines = vec![format!("\nLinting: {}\n", verdict.slice_path.display())];

        for result in &verdict.checks {
            lines.push(format!(
                "{} {}: {}{}{}",
                self.status_symbol(result.status),
                result.check_id.title(),
                self.color_start(result.status),
                result.status,
                self.color_end(),
            ));
            lines.extend(result.errors.iter().map(|e| format!("  {e}")));
            lines.extend(result.warnings.iter().map(|w| format!("  warning: {w}")));
        }

        lines.push(format!(
            "\nResult: {}{}{}",
            self.overall_color(verdict.overall_status),
            verdict.overall_status,
            self.color_end(),
        ));
        if verdict.has_warnings {
            lines.push("(with warnings)".to_string());
        }
        lines.join("\n")
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, verdict: &Verdict) -> Result<String, String> {
        let mut output = self.render_verdict(verdict);
        output.push('\n');
        Ok(output)
    }

    fn generate_project(&self, report: &ProjectReport) -> Result<String, String> {
        if report.discovered == 0 {
            return Ok("No slices found\n".to_string());
        }

        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();
        let w = |e: std::fmt::Error| e.to_string();

        writeln!(out, "\n{rule}").map_err(w)?;
        writeln!(out, "Linting {} slice(s)", report.discovered).map_err(w)?;
        writeln!(out, "{rule}\n").map_err(w)?;

        for result in &report.results {
            writeln!(out, "{}\n", self.render_verdict(&result.verdict)).map_err(w)?;
        }

        if report.stopped_early {
            writeln!(out, "❌ Stopping due to --fail-fast").map_err(w)?;
            return Ok(out);
        }

        let summary = &report.summary;
        writeln!(out, "{rule}").map_err(w)?;
        writeln!(out, "Summary:").map_err(w)?;
        writeln!(out, "  Total: {}", summary.total).map_err(w)?;
        writeln!(out, "  Passed: {}", summary.passed).map_err(w)?;
        writeln!(out, "  Failed: {}", summary.failed).map_err(w)?;
        writeln!(out, "  Warnings: {}", summary.warnings).map_err(w)?;
        writeln!(out, "{rule}\n").map_err(w)?;

        if !summary.failed_slices.is_empty() {
            writeln!(out, "❌ Failed slices:").map_err(w)?;
            for path in &summary.failed_slices {
                writeln!(out, "  • {path}").map_err(w)?;
            }
        }
        if !summary.warning_slices.is_empty() {
            writeln!(out, "⚠️ Slices with warnings:").map_err(w)?;
            for path in &summary.warning_slices {
                writeln!(out, "  • {path}").map_err(w)?;
            }
        }
        if summary.all_passed() {
            writeln!(out, "✅ All slices passed!").map_err(w)?;
        }
        Ok(out)
    }
}
