//! Aggregate outcome of all checks on one slice.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::types::{CheckId, CheckResult, CheckStatus, CheckTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OverallStatus {
    Passed,
    Failed,
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => f.write_str("PASSED"),
            Self::Failed => f.write_str("FAILED"),
        }
    }
}

/// Per-check results plus the derived overall status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub slice_path: PathBuf,
    /// In orchestration order.
    pub checks: Vec<CheckResult>,
    pub overall_status: OverallStatus,
    pub has_warnings: bool,
}

impl Verdict {
    /// FAILED iff a blocking check failed; `has_warnings` iff an advisory check
    /// reported errors. Advisory results never affect `overall_status`.
    pub fn aggregate(slice_path: &Path, checks: Vec<CheckResult>) -> Self {
        let failed = checks
            .iter()
            .any(|c| c.tier == CheckTier::Blocking && c.status == CheckStatus::Failed);
        let has_warnings = checks
            .iter()
            .any(|c| c.tier == CheckTier::Advisory && c.status == CheckStatus::Warning);
        Self {
            slice_path: slice_path.to_path_buf(),
            checks,
            overall_status: if failed { OverallStatus::Failed } else { OverallStatus::Passed },
            has_warnings,
        }
    }

    pub fn check(&self, id: CheckId) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.check_id == id)
    }

    pub fn passed(&self) -> bool {
        self.overall_status == OverallStatus::Passed
    }
}
