//! Top-level ASA configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{LintConfig, ReportConfig};
use crate::constants::{PROJECT_CONFIG_FILE, REPORT_FORMATS};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ASA_*`)
/// 3. Project config (`asa.toml` in project root)
/// 4. User config (`~/.asa/config.toml`)
/// 5. Compiled defaults
///
/// A slice's own `loc_limits` contract entry still beats all of these;
/// that resolution happens per slice in the size budget check.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AsaConfig {
    pub lint: LintConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub loc_per_file: Option<u64>,
    pub loc_total: Option<u64>,
    pub report_format: Option<String>,
    pub report_color: Option<bool>,
}

impl AsaConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(path = %user_config_path.display(), error = %e, "ignoring user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &AsaConfig) -> Result<(), ConfigError> {
        if config.lint.loc_per_file == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "lint.loc_per_file".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.lint.loc_total == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "lint.loc_total".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config
            .lint
            .internal_prefixes
            .iter()
            .any(|p| p.trim().is_empty() || p.contains(char::is_whitespace))
        {
            return Err(ConfigError::ValidationFailed {
                field: "lint.internal_prefixes".to_string(),
                message: "entries must be non-empty names without whitespace".to_string(),
            });
        }
        let format = config.report.effective_format();
        if !REPORT_FORMATS.contains(&format) {
            return Err(ConfigError::InvalidValue {
                field: "report.format".to_string(),
                message: format!("unknown format '{format}' (expected one of: {})", REPORT_FORMATS.join(", ")),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut AsaConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: AsaConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut AsaConfig, other: &AsaConfig) {
        if other.lint.loc_per_file.is_some() {
            base.lint.loc_per_file = other.lint.loc_per_file;
        }
        if other.lint.loc_total.is_some() {
            base.lint.loc_total = other.lint.loc_total;
        }
        if !other.lint.internal_prefixes.is_empty() {
            base.lint.internal_prefixes = other.lint.internal_prefixes.clone();
        }
        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }
        if other.report.color.is_some() {
            base.report.color = other.report.color;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ASA_LINT_LOC_PER_FILE`, `ASA_REPORT_FORMAT`, etc.
    /// Values that do not parse are ignored.
    fn apply_env_overrides(config: &mut AsaConfig) {
        if let Ok(val) = std::env::var("ASA_LINT_LOC_PER_FILE") {
            if let Ok(v) = val.parse::<u64>() {
                config.lint.loc_per_file = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ASA_LINT_LOC_TOTAL") {
            if let Ok(v) = val.parse::<u64>() {
                config.lint.loc_total = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ASA_REPORT_FORMAT") {
            config.report.format = Some(val);
        }
        if let Ok(val) = std::env::var("ASA_REPORT_COLOR") {
            if let Ok(v) = val.parse::<bool>() {
                config.report.color = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut AsaConfig, cli: &CliOverrides) {
        if let Some(v) = cli.loc_per_file {
            config.lint.loc_per_file = Some(v);
        }
        if let Some(v) = cli.loc_total {
            config.lint.loc_total = Some(v);
        }
        if let Some(ref v) = cli.report_format {
            config.report.format = Some(v.clone());
        }
        if let Some(v) = cli.report_color {
            config.report.color = Some(v);
        }
    }
}

/// Returns the user config path: `~/.asa/config.toml`.
fn user_config_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".asa").join("config.toml"))
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
