//! Check orchestrator: runs every check against one slice, in a fixed order.

use std::path::Path;

use asa_core::config::LintConfig;

use super::contract::ContractCheck;
use super::imports::ImportsCheck;
use super::loc_limits::LocLimitsCheck;
use super::structure::StructureCheck;
use super::types::*;
use super::verdict::Verdict;
use crate::slice::SliceLayout;

/// Runs all checks regardless of earlier failures and never fails itself.
pub struct CheckOrchestrator {
    checks: Vec<Box<dyn SliceCheck>>,
}

impl CheckOrchestrator {
    /// The four default checks: structure, contract, loc_limits, imports.
    pub fn new(config: &LintConfig) -> Self {
        let checks: Vec<Box<dyn SliceCheck>> = vec![
            Box::new(StructureCheck),
            Box::new(ContractCheck),
            Box::new(LocLimitsCheck::new(config)),
            Box::new(ImportsCheck::new(config)),
        ];
        Self { checks }
    }

    /// Create an orchestrator with custom checks, run in the given order.
    pub fn with_checks(checks: Vec<Box<dyn SliceCheck>>) -> Self {
        Self { checks }
    }

    pub fn checks(&self) -> impl Iterator<Item = &dyn SliceCheck> {
        self.checks.iter().map(|c| c.as_ref())
    }

    pub fn run(&self, slice_path: &Path) -> Verdict {
        let layout = SliceLayout::new(slice_path);
        let results: Vec<CheckResult> = self
            .checks
            .iter()
            .map(|check| {
                let result = check.evaluate(&layout);
                tracing::debug!(
                    slice = %slice_path.display(),
                    check = check.name(),
                    status = %result.status,
                    errors = result.errors.len(),
                    warnings = result.warnings.len(),
                    "check evaluated"
                );
                result
            })
            .collect();

        Verdict::aggregate(slice_path, results)
    }
}

impl Default for CheckOrchestrator {
    fn default() -> Self {
        Self::new(&LintConfig::default())
    }
}
