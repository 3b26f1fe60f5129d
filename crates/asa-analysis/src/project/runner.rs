use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use asa_core::errors::ScanError;

use super::summary::LintSummary;
use crate::checks::{CheckOrchestrator, Verdict};
use crate::slice::{discover_slices, SliceRef};

/// Options for a project-wide run.
#[derive(Debug, Clone, Default)]
pub struct ProjectLintOptions {
    /// Only lint slices of this domain (exact name).
    pub domain: Option<String>,
    /// Stop at the first FAILED verdict.
    pub fail_fast: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SliceVerdict {
    pub slice: SliceRef,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectReport {
    pub root: PathBuf,
    /// Slices found by discovery, evaluated or not.
    pub discovered: usize,
    /// In discovery order.
    pub results: Vec<SliceVerdict>,
    pub summary: LintSummary,
    /// Set when fail-fast stopped at a failing slice, even the last one.
    pub stopped_early: bool,
}

impl ProjectReport {
    pub fn passed(&self) -> bool {
        self.summary.all_passed()
    }
}

pub struct ProjectLinter {
    orchestrator: CheckOrchestrator,
}

impl ProjectLinter {
    pub fn new(orchestrator: CheckOrchestrator) -> Self {
        Self { orchestrator }
    }

    /// Discover and lint. Only a missing or unreadable `domains/` tree is an error.
    pub fn run(&self, root: &Path, options: &ProjectLintOptions) -> Result<ProjectReport, ScanError> {
        let slices = discover_slices(root, options.domain.as_deref())?;
        let discovered = slices.len();

        let (results, stopped_early) = if options.fail_fast {
            self.run_sequential(slices)
        } else {
            (self.run_parallel(slices), false)
        };

        let summary = LintSummary::from_results(&results);
        tracing::info!(
            root = %root.display(),
            discovered,
            evaluated = results.len(),
            failed = summary.failed,
            warnings = summary.warnings,
            stopped_early,
            "project lint complete"
        );

        Ok(ProjectReport {
            root: root.to_path_buf(),
            discovered,
            results,
            summary,
            stopped_early,
        })
    }

    fn run_sequential(&self, slices: Vec<SliceRef>) -> (Vec<SliceVerdict>, bool) {
        let total = slices.len();
        let mut results = Vec::with_capacity(total);
        for slice in slices {
            let verdict = self.orchestrator.run(&slice.path);
            let failed = !verdict.passed();
            results.push(SliceVerdict { slice, verdict });
            if failed {
                tracing::debug!(evaluated = results.len(), total, "fail-fast: stopping at first failure");
                return (results, true);
            }
        }
        (results, false)
    }

    /// `par_iter().collect()` keeps discovery order.
    fn run_parallel(&self, slices: Vec<SliceRef>) -> Vec<SliceVerdict> {
        slices
            .into_par_iter()
            .map(|slice| {
                let verdict = self.orchestrator.run(&slice.path);
                SliceVerdict { slice, verdict }
            })
            .collect()
    }
}

impl Default for ProjectLinter {
    fn default() -> Self {
        Self::new(CheckOrchestrator::default())
    }
}
