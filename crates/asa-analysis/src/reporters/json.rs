//! JSON reporter: structured JSON output.

use serde_json::json;

use crate::checks::Verdict;
use crate::project::ProjectReport;
use super::Reporter;

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl JsonReporter {
    fn verdict_value(verdict: &Verdict) -> serde_json::Value {
        let checks: Vec<serde_json::Value> = verdict
            .checks
            .iter()
            .map(|c| {
                json!({
                    "name": c.check_id,
                    "status": c.status,
                    "tier": c.tier,
                    "errors": c.error_messages(),
                    "warnings": c.warning_messages(),
                    "findings": c.errors.iter().chain(&c.warnings).collect::<Vec<_>>(),
                })
            })
            .collect();

        json!({
            "slice_path": verdict.slice_path.display().to_string(),
            "checks": checks,
            "overall_status": verdict.overall_status,
            "has_warnings": verdict.has_warnings,
        })
    }
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, verdict: &Verdict) -> Result<String, String> {
        serde_json::to_string_pretty(&Self::verdict_value(verdict)).map_err(|e| e.to_string())
    }

    fn generate_project(&self, report: &ProjectReport) -> Result<String, String> {
        let slices: Vec<serde_json::Value> = report
            .results
            .iter()
            .map(|r| {
                let mut value = Self::verdict_value(&r.verdict);
                value["domain"] = json!(r.slice.domain);
                value["slice"] = json!(r.slice.name);
                value
            })
            .collect();

        let output = json!({
            "root": report.root.display().to_string(),
            "discovered": report.discovered,
            "stopped_early": report.stopped_early,
            "summary": report.summary,
            "slices": slices,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}
