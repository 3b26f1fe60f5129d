//! Core types for slice checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::slice::SliceLayout;

/// The four slice check identifiers, in orchestration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    Structure,
    Contract,
    LocLimits,
    Imports,
}

impl CheckId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Contract => "contract",
            Self::LocLimits => "loc_limits",
            Self::Imports => "imports",
        }
    }

    /// Heading used in console reports.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Structure => "Structure",
            Self::Contract => "Contract",
            Self::LocLimits => "Loc Limits",
            Self::Imports => "Imports",
        }
    }

    pub fn all() -> &'static [CheckId] {
        &[Self::Structure, Self::Contract, Self::LocLimits, Self::Imports]
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much a check's errors weigh in the verdict.
///
/// Blocking errors fail the slice. Advisory errors only raise `has_warnings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckTier {
    Blocking,
    Advisory,
}

/// Per-check status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Ok,
    Failed,
    Warning,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("OK"),
            Self::Failed => f.write_str("FAILED"),
            Self::Warning => f.write_str("WARNING"),
        }
    }
}

/// What went wrong, independent of which check noticed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// A required file or document is absent.
    MissingResource,
    /// The contract exists but is not the expected structured format.
    MalformedDocument,
    /// A contract field is missing or has the wrong type.
    SchemaViolation,
    /// The slice directory name breaks the naming rules.
    NamingViolation,
    /// A line-count budget is exceeded.
    BudgetExceeded,
    /// An internal reference matches no allowed pattern.
    UnauthorizedReference,
}

/// A single message produced by a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub message: String,
    /// Governed file the finding is about, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Finding {
    pub fn new(kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            file: None,
        }
    }

    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of one check against one slice. Built fresh per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub check_id: CheckId,
    pub tier: CheckTier,
    pub status: CheckStatus,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl CheckResult {
    /// Derive the status from the findings: OK without errors, otherwise
    /// FAILED for blocking checks and WARNING for advisory ones.
    /// Warnings alone never change the status.
    pub fn from_findings(check_id: CheckId, tier: CheckTier, errors: Vec<Finding>, warnings: Vec<Finding>) -> Self {
        let status = match (errors.is_empty(), tier) {
            (true, _) => CheckStatus::Ok,
            (false, CheckTier::Blocking) => CheckStatus::Failed,
            (false, CheckTier::Advisory) => CheckStatus::Warning,
        };
        Self {
            check_id,
            tier,
            status,
            errors,
            warnings,
        }
    }

    /// A result carrying exactly one error, for checks that cannot proceed.
    pub fn single_error(check_id: CheckId, tier: CheckTier, finding: Finding) -> Self {
        Self::from_findings(check_id, tier, vec![finding], Vec::new())
    }

    pub fn is_ok(&self) -> bool {
        self.status == CheckStatus::Ok
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|f| f.message.as_str()).collect()
    }

    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|f| f.message.as_str()).collect()
    }
}

/// Trait for slice check implementations.
///
/// Checks are independent: none reads another's output, and each reads only
/// files under the slice it is given.
pub trait SliceCheck: Send + Sync {
    fn id(&self) -> CheckId;
    fn name(&self) -> &'static str {
        self.id().title()
    }
    fn description(&self) -> &'static str;
    fn tier(&self) -> CheckTier {
        CheckTier::Blocking
    }
    fn evaluate(&self, slice: &SliceLayout) -> CheckResult;
}
