//! Error handling for ASA.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod contract_error;
pub mod error_code;
pub mod lint_error;
pub mod parse_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use contract_error::ContractError;
pub use error_code::AsaErrorCode;
pub use lint_error::LintError;
pub use parse_error::ParseError;
pub use scan_error::ScanError;
