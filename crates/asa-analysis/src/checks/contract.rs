//! Contract check: is `slice.contract.json` present, parseable, and well typed?

use asa_core::constants::CONTRACT_FILE;
use asa_core::errors::ContractError;

use super::types::*;
use crate::slice::{ContractDocument, SchemaViolation, SliceLayout};

pub struct ContractCheck;

impl SliceCheck for ContractCheck {
    fn id(&self) -> CheckId {
        CheckId::Contract
    }

    fn description(&self) -> &'static str {
        "Validates required contract fields and their types, reporting every violation at once"
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
            Err(ContractError::Unreadable { message, .. }) => {
                return CheckResult::single_error(
                    self.id(),
                    self.tier(),
                    Finding::new(FindingKind::MalformedDocument, format!("Invalid JSON: {message}")).in_file(CONTRACT_FILE),
                );
            }
        };

        let errors = document
            .validate()
            .into_iter()
            .map(|violation| {
                let kind = match violation {
                    SchemaViolation::NotAnObject => FindingKind::MalformedDocument,
                    _ => FindingKind::SchemaViolation,
                };
                Finding::new(kind, violation.to_string()).in_file(CONTRACT_FILE)
            })
            .collect();

        CheckResult::from_findings(self.id(), self.tier(), errors, Vec::new())
    }
}
