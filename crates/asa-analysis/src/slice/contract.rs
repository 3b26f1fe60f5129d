//! Slice contract document: loading, schema validation, and lenient accessors.
//!
//! Validation is an explicit field table walked in one pass. Every missing
//! or mistyped field becomes its own `SchemaViolation`; nothing short-circuits.
//! The lenient accessors (`allowed_imports`, `loc_limits`) serve the checks
//! that must keep working on a contract that fails validation.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use asa_core::constants::CONTRACT_FILE;
use asa_core::errors::ContractError;

/// JSON shape a contract field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    List,
    Object,
}

impl FieldKind {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::List => value.is_array(),
            Self::Object => value.is_object(),
        }
    }

    /// Phrase used in messages: "must be a string", "must be an object".
    pub fn with_article(&self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::List => "a list",
            Self::Object => "an object",
        }
    }
}

/// A required top-level contract field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Required fields, in the order violations are reported.
pub const REQUIRED_FIELDS: [FieldSpec; 6] = [
    FieldSpec { name: "slice_name", kind: FieldKind::String },
    FieldSpec { name: "version", kind: FieldKind::String },
    FieldSpec { name: "domain", kind: FieldKind::String },
    FieldSpec { name: "allowed_imports", kind: FieldKind::List },
    FieldSpec { name: "public_api", kind: FieldKind::Object },
    FieldSpec { name: "dependencies", kind: FieldKind::Object },
];

/// One field-level schema problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum SchemaViolation {
    NotAnObject,
    MissingField { field: String },
    WrongType { field: String, expected: FieldKind },
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => f.write_str("Contract must be a JSON object"),
            Self::MissingField { field } => write!(f, "Missing required field: {field}"),
            Self::WrongType { field, expected } => {
                write!(f, "{field} must be {}", expected.with_article())
            }
        }
    }
}

/// Optional `loc_limits` override as read from a contract.
/// Absent or mistyped sub-keys stay `None` and fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocLimitsOverride {
    pub per_file: Option<u64>,
    pub total: Option<u64>,
    pub justification: Option<String>,
}

/// A parsed `slice.contract.json`.
#[derive(Debug, Clone)]
pub struct ContractDocument {
    path: PathBuf,
    value: Value,
}

impl ContractDocument {
    /// Load the contract from a slice root.
    pub fn load(slice_root: &Path) -> Result<Self, ContractError> {
        let path = slice_root.join(CONTRACT_FILE);
        if !path.exists() {
            return Err(ContractError::NotFound { path });
        }
        let content = std::fs::read_to_string(&path).map_err(|e| ContractError::Unreadable {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Self::parse(path, &content)
    }

    /// Parse contract text that was read from `path`.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, ContractError> {
        let path = path.into();
        match serde_json::from_str::<Value>(content) {
            Ok(value) => Ok(Self { path, value }),
            Err(e) => Err(ContractError::Unreadable {
                path,
                message: e.to_string(),
            }),
        }
    }

    fn fields(&self) -> Option<&Map<String, Value>> {
        self.value.as_object()
    }

    /// Validate against the schema, collecting every violation.
    ///
    /// Order: missing fields, then mistyped fields (both in schema order),
    /// then the nested `public_api.exports` rule.
    pub fn validate(&self) -> Vec<SchemaViolation> {
        let Some(fields) = self.fields() else {
            return vec![SchemaViolation::NotAnObject];
        };

        let mut violations: Vec<SchemaViolation> = REQUIRED_FIELDS
            .iter()
            .filter(|spec| !fields.contains_key(spec.name))
            .map(|spec| SchemaViolation::MissingField {
                field: spec.name.to_string(),
            })
            .collect();

        for spec in &REQUIRED_FIELDS {
            if let Some(value) = fields.get(spec.name) {
                if !spec.kind.matches(value) {
                    violations.push(SchemaViolation::WrongType {
                        field: spec.name.to_string(),
                        expected: spec.kind,
                    });
                }
            }
        }

        if let Some(Value::Object(public_api)) = fields.get("public_api") {
            if let Some(exports) = public_api.get("exports") {
                if !exports.is_array() {
                    violations.push(SchemaViolation::WrongType {
                        field: "public_api.exports".to_string(),
                        expected: FieldKind::List,
                    });
                }
            }
        }

        violations
    }

    /// Allowed import patterns. Fails soft: a missing or mistyped list is
    /// empty, non-string entries are skipped.
    pub fn allowed_imports(&self) -> Vec<String> {
        match self.fields().and_then(|f| f.get("allowed_imports")) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item.as_str() {
                    Some(s) => Some(s.to_string()),
                    None => {
                        tracing::warn!(contract = %self.path.display(), entry = %item, "skipping non-string allowed_imports entry");
                        None
                    }
                })
                .collect(),
            Some(other) => {
                tracing::warn!(contract = %self.path.display(), value = %other, "allowed_imports is not a list; treating as empty");
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// The `loc_limits` override, present only when it is a non-empty object.
    pub fn loc_limits(&self) -> Option<LocLimitsOverride> {
        let limits = match self.fields()?.get("loc_limits")? {
            Value::Object(map) if !map.is_empty() => map,
            Value::Object(_) | Value::Null => return None,
            other => {
                tracing::warn!(contract = %self.path.display(), value = %other, "loc_limits is not an object; ignoring override");
                return None;
            }
        };

        Some(LocLimitsOverride {
            per_file: self.limit_value(limits, "per_file"),
            total: self.limit_value(limits, "total"),
            justification: limits
                .get("justification")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }

    fn limit_value(&self, limits: &Map<String, Value>, key: &str) -> Option<u64> {
        let value = limits.get(key)?;
        let limit = value.as_u64();
        if limit.is_none() {
            tracing::warn!(contract = %self.path.display(), key, value = %value, "loc_limits entry is not a non-negative integer; using default");
        }
        limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(json: &str) -> ContractDocument {
        ContractDocument::parse(CONTRACT_FILE, json).unwrap()
    }

    #[test]
    fn valid_contract_has_no_violations() {
        let d = doc(r#"{
            "slice_name": "login", "version": "1.0.0", "domain": "auth",
            "allowed_imports": ["shared.*"], "public_api": {"exports": []},
            "dependencies": {}
        }"#);
        assert!(d.validate().is_empty());
    }

    #[test]
    fn missing_fields_come_before_type_errors() {
        let d = doc(r#"{"slice_name": 3, "domain": "auth", "allowed_imports": "shared.*"}"#);
        let messages: Vec<String> = d.validate().iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            [
                "Missing required field: version",
                "Missing required field: public_api",
                "Missing required field: dependencies",
                "slice_name must be a string",
                "allowed_imports must be a list",
            ]
        );
    }

    #[test]
    fn exports_must_be_a_list() {
        let d = doc(r#"{
            "slice_name": "a", "version": "1", "domain": "d",
            "allowed_imports": [], "public_api": {"exports": {"x": 1}},
            "dependencies": {}
        }"#);
        assert_eq!(d.validate().len(), 1);
        assert_eq!(d.validate()[0].to_string(), "public_api.exports must be a list");
    }

    #[test]
    fn empty_loc_limits_is_not_an_override() {
        assert_eq!(doc(r#"{"loc_limits": {}}"#).loc_limits(), None);
    }

    #[test]
    fn mistyped_limit_falls_back() {
        let limits = doc(r#"{"loc_limits": {"per_file": "lots", "total": 900}}"#)
            .loc_limits()
            .unwrap();
        assert_eq!(limits.per_file, None);
        assert_eq!(limits.total, Some(900));
        assert_eq!(limits.justification, None);
    }

    #[test]
    fn allowed_imports_fail_soft() {
        assert!(doc(r#"{"allowed_imports": "shared.*"}"#).allowed_imports().is_empty());
        assert_eq!(
            doc(r#"{"allowed_imports": ["shared.*", 7]}"#).allowed_imports(),
            vec!["shared.*".to_string()]
        );
        assert!(doc("[1, 2]").allowed_imports().is_empty());
    }
}
