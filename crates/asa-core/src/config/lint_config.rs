//! Lint configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_INTERNAL_PREFIXES, DEFAULT_LOC_PER_FILE, DEFAULT_LOC_TOTAL};

/// Configuration for the slice checks.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LintConfig {
    /// Significant lines allowed per governed file when a contract has no override. Default: 350.
    pub loc_per_file: Option<u64>,
    /// Significant lines allowed across a slice when a contract has no override. Default: 600.
    pub loc_total: Option<u64>,
    /// Namespace roots treated as internal by the import check. Default: `domains`, `shared`.
    #[serde(default)]
    pub internal_prefixes: Vec<String>,
}

impl LintConfig {
    pub fn effective_loc_per_file(&self) -> u64 {
        self.loc_per_file.unwrap_or(DEFAULT_LOC_PER_FILE)
    }

    pub fn effective_loc_total(&self) -> u64 {
        self.loc_total.unwrap_or(DEFAULT_LOC_TOTAL)
    }

    pub fn effective_internal_prefixes(&self) -> Vec<String> {
        if self.internal_prefixes.is_empty() {
            DEFAULT_INTERNAL_PREFIXES.iter().map(|p| p.to_string()).collect()
        } else {
            self.internal_prefixes.clone()
        }
    }
}
