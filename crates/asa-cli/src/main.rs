use std::process::ExitCode;

use clap::Parser;

use asa_analysis::reporters::create_reporter;
use asa_analysis::ProjectLintOptions;
use asa_core::config::AsaConfig;
use asa_core::errors::LintError;
use asa_core::tracing::init_tracing;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let config = AsaConfig::load(&cli.root, Some(&cli.overrides())).map_err(LintError::from)?;
    let format = config.report.effective_format();
    let reporter = create_reporter(format, config.report.effective_color())
        .ok_or_else(|| LintError::UnknownFormat(format.to_string()))?;
    tracing::debug!(root = %cli.root.display(), format, "configuration resolved");

    match cli.command {
        Commands::Lint { slice_path } => commands::lint_slice(&slice_path, &config, reporter.as_ref()),
        Commands::LintAll { domain, fail_fast } => {
            let options = ProjectLintOptions { domain, fail_fast };
            commands::lint_all(&cli.root, &options, &config, reporter.as_ref())
        }
        Commands::ListSlices { domain } => commands::list_slices(&cli.root, domain.as_deref()),
    }
}
