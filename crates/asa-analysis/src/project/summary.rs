//! Pass/fail/warning tallies across a project run.

use serde::Serialize;

use super::runner::SliceVerdict;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LintSummary {
    /// Slices evaluated.
    pub total: usize,
    /// Slices that did not fail, warned ones included.
    pub passed: usize,
    pub failed: usize,
    /// Slices that passed with warnings.
    pub warnings: usize,
    pub failed_slices: Vec<String>,
    pub warning_slices: Vec<String>,
}

impl LintSummary {
    pub fn from_results(results: &[SliceVerdict]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Default::default()
        };
        for result in results {
            let label = result.verdict.slice_path.display().to_string();
            if !result.verdict.passed() {
                summary.failed_slices.push(label);
            } else if result.verdict.has_warnings {
                summary.warning_slices.push(label);
            }
        }
        summary.failed = summary.failed_slices.len();
        summary.warnings = summary.warning_slices.len();
        summary.passed = summary.total - summary.failed;
        summary
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
