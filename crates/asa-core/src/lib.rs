//! asa-core: shared foundation for the ASA slice compliance checker.
//!
//! - `constants`: slice layout file names, default budgets, internal namespaces
//! - `errors`: one `thiserror` enum per subsystem plus the aggregate `LintError`
//! - `config`: TOML configuration with layered resolution
//! - `tracing`: `ASA_LOG`-driven subscriber setup

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::AsaConfig;
pub use errors::LintError;
