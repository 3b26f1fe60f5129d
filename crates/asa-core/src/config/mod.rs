//! Configuration system for ASA.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod asa_config;
pub mod lint_config;
pub mod report_config;

pub use asa_config::{AsaConfig, CliOverrides};
pub use lint_config::LintConfig;
pub use report_config::ReportConfig;
