//! Shared constants for the slice compliance checker.

/// ASA version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Slice layout ----

/// Specification document expected at the slice root.
pub const SPEC_FILE: &str = "slice.spec.md";

/// Contract document expected at the slice root.
pub const CONTRACT_FILE: &str = "slice.contract.json";

/// Governed source files, in reporting order.
pub const GOVERNED_SOURCE_FILES: [&str; 4] = ["handler.py", "service.py", "repository.py", "schemas.py"];

/// Slice test file, relative to the slice root.
pub const TEST_FILE: &str = "tests/test_slice.py";

/// Every path the structure check requires, in reporting order.
pub const REQUIRED_FILES: [&str; 7] = [
    SPEC_FILE,
    CONTRACT_FILE,
    "handler.py",
    "service.py",
    "repository.py",
    "schemas.py",
    TEST_FILE,
];

/// Directory under the project root holding one directory per domain.
pub const DOMAINS_DIR: &str = "domains";

/// Directory under each domain holding its slices.
pub const SLICES_DIR: &str = "slices";

// ---- Size budget ----

/// Default maximum significant lines per governed file.
pub const DEFAULT_LOC_PER_FILE: u64 = 350;

/// Default maximum significant lines across all governed files of a slice.
pub const DEFAULT_LOC_TOTAL: u64 = 600;

// ---- Import compliance ----

/// Namespace roots that denote the project's own code.
pub const DEFAULT_INTERNAL_PREFIXES: [&str; 2] = ["domains", "shared"];

// ---- Reporting ----

/// Default report format.
pub const DEFAULT_REPORT_FORMAT: &str = "console";

/// Report formats understood by the reporters.
pub const REPORT_FORMATS: [&str; 2] = ["console", "json"];

/// Name of the project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "asa.toml";
