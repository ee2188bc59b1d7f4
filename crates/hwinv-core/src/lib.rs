//! hwinv core - in-memory hardware inventory kernel
//!
//! This crate holds everything about the inventory that does not touch I/O:
//! - `HardwareItem` / `HardwareDraft` models and their JSON shape
//! - Field validation and form-input parsing
//! - The `Inventory` collection with add / update / remove semantics
//! - Read-only queries (search, brand filter, brands, stock counts)
//! - The error and logging facilities shared by the other crates
//!
//! Persistence lives in `hwinv-store`.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod rules;

// Re-exported for the logging macros
pub use hwinv_core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, HwinvError, Result};
pub use hwinv_core_types::HardwareId;
pub use model::{HardwareDraft, HardwareItem};
pub use ops::Inventory;
pub use queries::StockLine;
