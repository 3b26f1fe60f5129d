//! Structure check: are the required files present and is the slice well named?

use super::types::*;
use crate::slice::SliceLayout;

pub struct StructureCheck;

impl SliceCheck for StructureCheck {
    fn id(&self) -> CheckId {
        CheckId::Structure
    }

    fn description(&self) -> &'static str {
        "Confirms the required slice files exist and the slice name is lowercase without spaces"
    }

    fn evaluate(&self, slice: &SliceLayout) -> CheckResult {
        let root = slice.root();
        if !root.exists() {
            return CheckResult::single_error(
                self.id(),
                self.tier(),
                Finding::new(
                    FindingKind::MissingResource,
                    format!("Slice path does not exist: {}", root.display()),
                ),
            );
        }
        if !root.is_dir() {
            return CheckResult::single_error(
                self.id(),
                self.tier(),
                Finding::new(
                    FindingKind::MissingResource,
                    format!("Slice path is not a directory: {}", root.display()),
                ),
            );
        }

        let mut errors: Vec<Finding> = slice
            .required_paths()
            .filter(|(_, path)| !path.exists())
            .map(|(rel, _)| {
                Finding::new(FindingKind::MissingResource, format!("Missing required file: {rel}")).in_file(rel)
            })
            .collect();

        let name = slice.slice_name();
        if !is_lowercase_name(&name) {
            errors.push(Finding::new(
                FindingKind::NamingViolation,
                format!("Slice name must be lowercase: {name}"),
            ));
        }
        if name.contains(' ') {
            errors.push(Finding::new(
                FindingKind::NamingViolation,
                format!("Slice name cannot contain spaces: {name}"),
            ));
        }

        CheckResult::from_findings(self.id(), self.tier(), errors, Vec::new())
    }
}

/// At least one cased character and no uppercase ones. Digits, `_` and
/// other uncased characters are neutral, so `v2_login` passes and `123` fails.
pub fn is_lowercase_name(name: &str) -> bool {
    name.chars().any(char::is_lowercase) && !name.chars().any(char::is_uppercase)
}
