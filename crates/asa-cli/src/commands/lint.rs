use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;

use asa_analysis::reporters::Reporter;
use asa_analysis::{CheckOrchestrator, ProjectLintOptions, ProjectLinter};
use asa_core::config::AsaConfig;
use asa_core::errors::{LintError, ScanError};

use super::NO_DOMAINS_MESSAGE;

/// `asa lint <slice_path>`: exit 0 when the slice passes, 1 otherwise.
pub fn lint_slice(slice_path: &Path, config: &AsaConfig, reporter: &dyn Reporter) -> anyhow::Result<ExitCode> {
    if !slice_path.exists() {
        eprintln!("❌ Path does not exist: {}", slice_path.display());
        return Ok(ExitCode::from(2));
    }
    if !slice_path.is_dir() {
        eprintln!("❌ Not a directory: {}", slice_path.display());
        return Ok(ExitCode::FAILURE);
    }

    let verdict = CheckOrchestrator::new(&config.lint).run(slice_path);
    let output = reporter.generate(&verdict).map_err(LintError::Report)?;
    print!("{output}");

    Ok(if verdict.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// `asa lint-all`: exit 1 if any evaluated slice failed or `domains/` is missing.
pub fn lint_all(
    root: &Path,
    options: &ProjectLintOptions,
    config: &AsaConfig,
    reporter: &dyn Reporter,
) -> anyhow::Result<ExitCode> {
    let linter = ProjectLinter::new(CheckOrchestrator::new(&config.lint));
    let report = match linter.run(root, options) {
        Ok(report) => report,
        Err(ScanError::DomainsNotFound { .. }) => {
            eprintln!("{NO_DOMAINS_MESSAGE}");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(LintError::from(e)).context("slice discovery failed"),
    };

    let output = reporter.generate_project(&report).map_err(LintError::Report)?;
    print!("{output}");

    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
