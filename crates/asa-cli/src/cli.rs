use std::path::PathBuf;

use clap::{Parser, Subcommand};

use asa_core::config::CliOverrides;
use asa_core::constants::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "asa",
    version = VERSION,
    about = "ASA CLI Tool - AI-Sliced Architecture utilities",
    long_about = "ASA CLI Tool - AI-Sliced Architecture utilities.\n\nUse 'asa COMMAND --help' for more information on a command."
)]
pub struct Cli {
    #[arg(long, global = true, default_value = ".", help = "Project root holding domains/ and asa.toml")]
    pub root: PathBuf,
    #[arg(long, global = true, help = "Report format (console or json)")]
    pub format: Option<String>,
    #[arg(long, global = true, overrides_with = "no_color", help = "Colour status tags in console output")]
    pub color: bool,
    #[arg(long, global = true, overrides_with = "color", help = "Disable colour in console output")]
    pub no_color: bool,
    #[arg(long, global = true, help = "Default per-file significant line budget")]
    pub loc_per_file: Option<u64>,
    #[arg(long, global = true, help = "Default per-slice significant line budget")]
    pub loc_total: Option<u64>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lint a specific slice.
    Lint {
        /// Slice directory, e.g. domains/auth/slices/login_demo
        slice_path: PathBuf,
    },
    /// Lint all slices in the project.
    LintAll {
        #[arg(short, long, help = "Filter by domain")]
        domain: Option<String>,
        #[arg(short, long, default_value_t = false, help = "Stop on first failure")]
        fail_fast: bool,
    },
    /// List all slices in the project.
    ListSlices {
        #[arg(short, long, help = "Filter by domain (e.g., auth, users)")]
        domain: Option<String>,
    },
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        let report_color = if self.color {
            Some(true)
        } else if self.no_color {
            Some(false)
        } else {
            None
        };
        CliOverrides {
            loc_per_file: self.loc_per_file,
            loc_total: self.loc_total,
            report_format: self.format.clone(),
            report_color,
        }
    }
}
