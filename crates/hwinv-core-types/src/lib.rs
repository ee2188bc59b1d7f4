//! Core types shared across the hwinv crates
//!
//! - **Identifiers**: `HardwareId`
//! - **Schema constants**: canonical log field keys and event names

pub mod id;
pub mod schema;

pub use id::HardwareId;
