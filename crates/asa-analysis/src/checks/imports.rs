//! Import compliance check: internal imports must match `allowed_imports`.
//!
//! Third-party and standard-library imports are never checked. Governed files
//! that are missing, unreadable, or unparsable contribute no imports.

use std::path::Path;

use asa_core::config::LintConfig;
use asa_core::constants::CONTRACT_FILE;
use asa_core::errors::{AsaErrorCode, ContractError};

use super::allowlist::ImportAllowList;
use super::types::*;
use crate::parsers::{ImportExtractor, ImportSet, PythonImportExtractor};
use crate::slice::{ContractDocument, SliceLayout};

pub struct ImportsCheck {
    internal_prefixes: Vec<String>,
    extractor: Box<dyn ImportExtractor>,
}

impl ImportsCheck {
    pub fn new(config: &LintConfig) -> Self {
        Self::with_extractor(config, Box::new(PythonImportExtractor::new()))
    }

    pub fn with_extractor(config: &LintConfig, extractor: Box<dyn ImportExtractor>) -> Self {
        Self {
            internal_prefixes: config.effective_internal_prefixes(),
            extractor,
        }
    }

    /// True when `reference` lives under one of the project's own namespace roots.
    pub fn is_internal(&self, reference: &str) -> bool {
        self.internal_prefixes.iter().any(|prefix| {
            reference
                .strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.starts_with('.'))
        })
    }

    fn handles(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extractor.extensions().contains(&ext))
    }

    fn imports_of(&self, path: &Path) -> ImportSet {
        if !path.exists() || !self.handles(path) {
            return ImportSet::new();
        }
        let source = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "unreadable governed file; no imports checked");
                return ImportSet::new();
            }
        };
        self.extractor.extract_imports(&source, path).unwrap_or_else(|e| {
            tracing::debug!(
                file = %path.display(),
                language = self.extractor.language(),
                error = %e.coded_string(),
                "treating file as having no imports"
            );
            ImportSet::new()
        })
    }
}

impl Default for ImportsCheck {
    fn default() -> Self {
        Self::new(&LintConfig::default())
    }
}

impl SliceCheck for ImportsCheck {
    fn id(&self) -> CheckId {
        CheckId::Imports
    }

    fn description(&self) -> &'static str {
        "Verifies internal imports of governed files against the contract's allowed_imports"
    }

    fn evaluate(&self, slice: &SliceLayout) -> CheckResult {
        let document = match ContractDocument::load(slice.root()) {
            Ok(doc) => doc,
            Err(ContractError::NotFound { .. }) => {
                return CheckResult::single_error(
                    self.id(),
                    self.tier(),
                    Finding::new(FindingKind::MissingResource, format!("{CONTRACT_FILE} not found")).in_file(CONTRACT_FILE),
                );
            }
            Err(e @ ContractError::Unreadable { .. }) => {
                tracing::debug!(error = %e.coded_string(), "imports check cannot read contract");
                return CheckResult::single_error(
                    self.id(),
                    self.tier(),
                    Finding::new(FindingKind::MalformedDocument, format!("Failed to load {CONTRACT_FILE}")).in_file(CONTRACT_FILE),
                );
            }
        };

        let allowed = ImportAllowList::compile(&document.allowed_imports());
        let mut errors = Vec::new();

        for (name, path) in slice.governed_files() {
            for reference in self.imports_of(&path) {
                if !self.is_internal(&reference) || allowed.is_allowed(&reference) {
                    continue;
                }
                errors.push(
                    Finding::new(
                        FindingKind::UnauthorizedReference,
                        format!("{name}: Unauthorized import '{reference}' (not in allowed_imports)"),
                    )
                    .in_file(name),
                );
            }
        }

        CheckResult::from_findings(self.id(), self.tier(), errors, Vec::new())
    }
}
