//! Size budget check: significant lines per governed file and per slice.
//!
//! Advisory tier: budget errors surface as WARNING and never fail a slice.
//! A contract `loc_limits` override turns every violation into a warning
//! that carries the override's justification.

use std::path::Path;

use asa_core::config::LintConfig;

use super::types::*;
use crate::slice::{ContractDocument, LocLimitsOverride, SliceLayout};

/// Non-blank lines that are not full-line `#` comments.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn count_significant_lines(content: &str) -> u64 {
    content
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .count() as u64
}

/// Limits in force for one slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocBudget {
    pub per_file: u64,
    pub total: u64,
    /// `Some` only when the contract carries an override.
    pub justification: Option<String>,
}

impl LocBudget {
    /// Contract override first, then the configured defaults.
    pub fn resolve(defaults: &LintConfig, custom: Option<&LocLimitsOverride>) -> Self {
        match custom {
            Some(o) => Self {
                per_file: o.per_file.unwrap_or_else(|| defaults.effective_loc_per_file()),
                total: o.total.unwrap_or_else(|| defaults.effective_loc_total()),
                justification: Some(o.justification.clone().unwrap_or_default()),
            },
            None => Self {
                per_file: defaults.effective_loc_per_file(),
                total: defaults.effective_loc_total(),
                justification: None,
            },
        }
    }

    pub fn is_override(&self) -> bool {
        self.justification.is_some()
    }
}

pub struct LocLimitsCheck {
    defaults: LintConfig,
}

impl LocLimitsCheck {
    pub fn new(defaults: &LintConfig) -> Self {
        Self {
            defaults: defaults.clone(),
        }
    }

    fn budget_for(&self, slice: &SliceLayout) -> LocBudget {
        // An absent or broken contract is the contract check's concern; budgets fall back.
        let custom = ContractDocument::load(slice.root())
            .ok()
            .and_then(|doc| doc.loc_limits());
        LocBudget::resolve(&self.defaults, custom.as_ref())
    }
}

impl Default for LocLimitsCheck {
    fn default() -> Self {
        Self::new(&LintConfig::default())
    }
}

impl SliceCheck for LocLimitsCheck {
    fn id(&self) -> CheckId {
        CheckId::LocLimits
    }

    fn description(&self) -> &'static str {
        "Counts significant lines in governed files against per-file and total budgets"
    }

    fn tier(&self) -> CheckTier {
        CheckTier::Advisory
    }

    fn evaluate(&self, slice: &SliceLayout) -> CheckResult {
        let budget = self.budget_for(slice);
        let mut over_budget: Vec<Finding> = Vec::new();
        let mut total = 0u64;

        for (name, path) in slice.governed_files() {
            let Some(loc) = file_loc(&path) else {
                continue;
            };
            total += loc;
            if loc > budget.per_file {
                let message = match &budget.justification {
                    Some(why) => format!("{name}: {loc} LOC (max {}) - Override specified: {why}", budget.per_file),
                    None => format!("{name}: {loc} LOC exceeds limit of {}", budget.per_file),
                };
                over_budget.push(Finding::new(FindingKind::BudgetExceeded, message).in_file(name));
            }
        }

        if total > budget.total {
            let message = match &budget.justification {
                Some(why) => format!("Total: {total} LOC (max {}) - Override specified: {why}", budget.total),
                None => format!("Total: {total} LOC exceeds limit of {}", budget.total),
            };
            over_budget.push(Finding::new(FindingKind::BudgetExceeded, message));
        }

        tracing::debug!(
            slice = %slice.root().display(),
            total,
            per_file_limit = budget.per_file,
            total_limit = budget.total,
            overridden = budget.is_override(),
            "loc budget evaluated"
        );

        let (errors, warnings) = if budget.is_override() {
            (Vec::new(), over_budget)
        } else {
            (over_budget, Vec::new())
        };
        CheckResult::from_findings(self.id(), self.tier(), errors, warnings)
    }
}

/// Significant lines of one file. `None` when absent; unreadable files count as zero.
fn file_loc(path: &Path) -> Option<u64> {
    if !path.exists() {
        return None;
    }
    match std::fs::read(path) {
        Ok(bytes) => Some(count_significant_lines(&String::from_utf8_lossy(&bytes))),
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "unreadable governed file; counting as 0 lines");
            Some(0)
        }
    }
}
