use std::path::Path;
use std::process::ExitCode;

use asa_analysis::slice::discover_slices;
use asa_core::errors::{LintError, ScanError};

use super::NO_DOMAINS_MESSAGE;

/// `asa list-slices`: a missing `domains/` directory is reported but not an error.
pub fn list_slices(root: &Path, domain: Option<&str>) -> anyhow::Result<ExitCode> {
    let slices = match discover_slices(root, domain) {
        Ok(slices) => slices,
        Err(ScanError::DomainsNotFound { .. }) => {
            eprintln!("{NO_DOMAINS_MESSAGE}");
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => return Err(LintError::from(e).into()),
    };

    if slices.is_empty() {
        println!("No slices found");
        return Ok(ExitCode::SUCCESS);
    }

    println!("\nFound {} slice(s):\n", slices.len());
    for slice in &slices {
        println!("  • {}", slice.qualified_name());
    }
    println!();
    Ok(ExitCode::SUCCESS)
}
