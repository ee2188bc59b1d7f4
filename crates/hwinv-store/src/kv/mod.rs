//! Persistent key-value store boundary
//!
//! The repository only needs two operations from the platform's local
//! storage: read a string under a key and replace the string under a key.
//! There are no partial writes and no transactions.
//!
//! Provides:
//! - `KeyValueStore` trait
//! - `FsKv`: one file per key, atomic replace
//! - `MemoryKv`: in-process map with failure injection for tests

mod atomic;
mod fs;
mod memory;

use async_trait::async_trait;

use crate::errors::Result;

pub use fs::FsKv;
pub use memory::MemoryKv;

/// A string key-value store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`; `None` if nothing was ever written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
