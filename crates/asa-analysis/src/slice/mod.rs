//! Slice model: on-disk layout, the contract document, and discovery.

pub mod contract;
pub mod discovery;
pub mod layout;

pub use contract::{ContractDocument, FieldKind, LocLimitsOverride, SchemaViolation};
pub use discovery::{discover_slices, SliceRef};
pub use layout::SliceLayout;
