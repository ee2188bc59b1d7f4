//! hwinv store - persistence for the hardware inventory
//!
//! Provides:
//! - `KeyValueStore` boundary with filesystem and in-memory backends
//! - JSON codec for the stored collection
//! - `HardwareRepository`: in-memory inventory with write-through persistence

pub mod codec;
pub mod errors;
pub mod kv;
pub mod repository;

// Re-export key types
pub use codec::STORAGE_KEY;
pub use errors::Result;
pub use kv::{FsKv, KeyValueStore, MemoryKv};
pub use repository::{HardwareRepository, LoadOutcome, PendingWrite};
