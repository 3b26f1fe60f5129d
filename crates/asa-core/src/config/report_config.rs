//! Report configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REPORT_FORMAT;

/// Configuration for report rendering.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// "console" | "json". Default: "console".
    pub format: Option<String>,
    /// ANSI colour for status tags. Default: false.
    pub color: Option<bool>,
}

impl ReportConfig {
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_REPORT_FORMAT)
    }

    pub fn effective_color(&self) -> bool {
        self.color.unwrap_or(false)
    }
}
