//! Slice checks (structure, contract, size budget, imports) and their orchestrator.

pub mod allowlist;
pub mod contract;
pub mod imports;
pub mod loc_limits;
pub mod orchestrator;
pub mod structure;
pub mod types;
pub mod verdict;

pub use allowlist::ImportAllowList;
pub use contract::ContractCheck;
pub use imports::ImportsCheck;
pub use loc_limits::{count_significant_lines, LocBudget, LocLimitsCheck};
pub use orchestrator::CheckOrchestrator;
pub use structure::StructureCheck;
pub use types::{CheckId, CheckResult, CheckStatus, CheckTier, Finding, FindingKind, SliceCheck};
pub use verdict::{OverallStatus, Verdict};
