//! In-memory key-value store
//!
//! Used by tests and throwaway sessions. Counts operations and can be told to
//! fail reads or writes so the repository's recovery paths can be exercised.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use super::KeyValueStore;
use crate::errors::{read_failed, write_failed, Result};

/// In-process key-value store
#[derive(Debug, Default)]
pub struct MemoryKv {
    values: Mutex<HashMap<String, String>>,
    reads: AtomicUsize,
    writes: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one value
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let kv = Self::new();
        if let Ok(mut values) = kv.values.lock() {
            values.insert(key.into(), value.into());
        }
        kv
    }

    /// Current value under `key`, bypassing counters and failure injection
    pub fn peek(&self, key: &str) -> Option<String> {
        self.values.lock().ok().and_then(|v| v.get(key).cloned())
    }

    /// Number of `get` calls so far
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of `set` calls so far, including failed ones
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make subsequent reads fail
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent writes fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for MemoryKv {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(read_failed(key, "injected read failure"));
        }
        let values = self
            .values
            .lock()
            .map_err(|_| read_failed(key, "memory store lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(write_failed(key, "injected write failure"));
        }
        let mut values = self
            .values
            .lock()
            .map_err(|_| write_failed(key, "memory store lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
