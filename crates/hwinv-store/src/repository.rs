//! Write-through hardware repository
//!
//! Owns the in-memory [`Inventory`] and mirrors it to a [`KeyValueStore`].
//! Mutations apply to memory synchronously and return a [`PendingWrite`] for
//! the background write of the full collection. Callers that need durability
//! await it; everyone else may drop it and the write still happens.
//!
//! Background writes are sequenced by generation: a snapshot older than one
//! already attempted is skipped, so the store converges on the latest
//! in-memory state even if tasks are scheduled out of order.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use hwinv_core::errors::ExError;
use hwinv_core::ops::{add_hardware, remove_hardware, update_hardware, Inventory};
use hwinv_core::queries::{self, StockLine};
use hwinv_core::rules::invariants::{find_duplicate_ids, find_duplicate_serials};
use hwinv_core::{
    log_op_end, log_op_error, log_op_start, HardwareDraft, HardwareId, HardwareItem,
};
use hwinv_core_types::schema::EVENT_FALLBACK;
use tokio::runtime::Handle;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::codec::{decode_collection, encode_collection, STORAGE_KEY};
use crate::errors::{no_runtime, not_initialized, task_failed, write_status_closed, Result};
use crate::kv::KeyValueStore;

/// What `initialize()` found in the store
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The stored collection was read
    Loaded { count: usize },
    /// Nothing has been stored yet
    Missing,
    /// The store could not be read or its contents could not be parsed;
    /// the repository started empty
    Recovered { error: ExError },
    /// The repository was already initialized; nothing was read
    AlreadyInitialized { count: usize },
}

/// Handle to the background write triggered by a mutation
///
/// Resolves to the outcome of writing the collection snapshot taken right
/// after the mutation. A snapshot superseded by a newer one before it was
/// attempted resolves to `Ok(())` without writing.
///
/// Dropping the handle does not cancel the write.
#[derive(Debug)]
pub struct PendingWrite {
    generation: u64,
    handle: JoinHandle<Result<()>>,
}

impl PendingWrite {
    /// Sequence number of the snapshot this write carries
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Future for PendingWrite {
    type Output = Result<()>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.handle)
            .poll(cx)
            .map(|joined| joined.map_err(task_failed).and_then(|outcome| outcome))
    }
}

#[derive(Debug, Clone, Default)]
struct WriteStatus {
    /// Highest generation whose write has been attempted and finished
    settled: u64,
    last_error: Option<ExError>,
}

#[derive(Debug)]
struct WriteSequencer {
    last_attempted: Mutex<u64>,
    status: watch::Sender<WriteStatus>,
}

impl WriteSequencer {
    fn new() -> Self {
        let (status, _) = watch::channel(WriteStatus::default());
        Self {
            last_attempted: Mutex::new(0),
            status,
        }
    }

    async fn write<S>(
        &self,
        store: &S,
        key: &str,
        generation: u64,
        blob: Result<String>,
    ) -> Result<()>
    where
        S: KeyValueStore + ?Sized,
    {
        let start = Instant::now();
        let mut last_attempted = self.last_attempted.lock().await;
        if generation <= *last_attempted {
            tracing::debug!(
                component = module_path!(),
                op = "persist",
                generation,
                superseded_by = *last_attempted,
                "Skipped superseded snapshot"
            );
            return Ok(());
        }
        *last_attempted = generation;

        let result = match blob {
            Ok(blob) => {
                let blob_bytes = blob.len();
                store.set(key, &blob).await.map(|()| blob_bytes)
            }
            Err(err) => Err(err),
        };

        let result = match result {
            Ok(blob_bytes) => {
                log_op_end!(
                    "persist",
                    duration_ms = elapsed_ms(start),
                    store_key = key,
                    generation = generation,
                    blob_bytes = blob_bytes as u64
                );
                Ok(())
            }
            Err(err) => {
                // Not retried and not rolled back: memory stays ahead of the
                // store until the next successful write.
                log_op_error!(
                    "persist",
                    err,
                    duration_ms = elapsed_ms(start),
                    store_key = key,
                    generation = generation
                );
                Err(err)
            }
        };

        self.status.send_modify(|status| {
            if generation > status.settled {
                status.settled = generation;
                status.last_error = result.as_ref().err().cloned();
            }
        });

        result
    }
}

/// Hardware repository with write-through persistence
///
/// Construct one per process and pass it to whatever drives the UI; call
/// [`initialize`](Self::initialize) before mutating. Not thread-safe: all
/// calls are expected from a single logical caller.
pub struct HardwareRepository<S: ?Sized> {
    store: Arc<S>,
    key: String,
    runtime: Handle,
    inventory: Inventory,
    initialized: bool,
    generation: u64,
    writes: Arc<WriteSequencer>,
}

impl<S> HardwareRepository<S>
where
    S: KeyValueStore + ?Sized + 'static,
{
    /// Create a repository over `store` using the default key
    ///
    /// # Errors
    ///
    /// Fails if called outside a Tokio runtime; background writes are
    /// spawned on the runtime current at construction.
    pub fn new(store: Arc<S>) -> Result<Self> {
        Self::with_key(store, STORAGE_KEY)
    }

    /// Create a repository over `store` using a custom key
    ///
    /// # Errors
    ///
    /// Fails if called outside a Tokio runtime.
    pub fn with_key(store: Arc<S>, key: impl Into<String>) -> Result<Self> {
        let runtime = Handle::try_current().map_err(no_runtime)?;
        Ok(Self {
            store,
            key: key.into(),
            runtime,
            inventory: Inventory::new(),
            initialized: false,
            generation: 0,
            writes: Arc::new(WriteSequencer::new()),
        })
    }

    /// Load the collection from the store
    ///
    /// Performs exactly one read. A missing value yields an empty collection;
    /// an unreadable or unparsable one also yields an empty collection and is
    /// logged as a fallback, never returned as an error.
    ///
    /// Once initialized, memory is the source of truth: calling this again
    /// does not read the store and keeps every accepted mutation, including
    /// ones whose write is still pending.
    pub async fn initialize(&mut self) -> LoadOutcome {
        let start = Instant::now();
        log_op_start!("initialize", store_key = %self.key);

        if self.initialized {
            let count = self.inventory.len();
            tracing::debug!(
                component = module_path!(),
                op = "initialize",
                store_key = %self.key,
                generation = self.generation,
                "Already initialized; keeping the in-memory collection"
            );
            log_op_end!(
                "initialize",
                duration_ms = elapsed_ms(start),
                item_count = count as u64
            );
            return LoadOutcome::AlreadyInitialized { count };
        }

        let (items, outcome) = match self.store.get(&self.key).await {
            Ok(None) => (Vec::new(), LoadOutcome::Missing),
            Ok(Some(blob)) => match decode_collection(&blob) {
                Ok(items) => {
                    let count = items.len();
                    (items, LoadOutcome::Loaded { count })
                }
                Err(error) => (Vec::new(), LoadOutcome::Recovered { error }),
            },
            Err(error) => (Vec::new(), LoadOutcome::Recovered { error }),
        };

        if let LoadOutcome::Recovered { error } = &outcome {
            tracing::warn!(
                component = module_path!(),
                op = "initialize",
                event = EVENT_FALLBACK,
                store_key = %self.key,
                err.code = error.code(),
                error = %error,
                "Stored collection unreadable; starting empty"
            );
        }

        for (serial, ids) in find_duplicate_serials(&items) {
            tracing::warn!(
                component = module_path!(),
                op = "initialize",
                serial_number = %serial,
                hardware_ids = ?ids,
                "Stored collection contains a duplicated serial number"
            );
        }
        for id in find_duplicate_ids(&items) {
            tracing::warn!(
                component = module_path!(),
                op = "initialize",
                hardware_id = %id,
                "Stored collection contains a duplicated id"
            );
        }

        self.inventory = Inventory::from_items(items);
        self.initialized = true;

        log_op_end!(
            "initialize",
            duration_ms = elapsed_ms(start),
            item_count = self.inventory.len() as u64
        );
        outcome
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ===== Mutations =====

    /// Add a new item
    ///
    /// # Errors
    ///
    /// `NotInitialized`, `InvalidField`, `InvalidMonthlyCost` or
    /// `DuplicateSerialNumber`; in every case nothing is changed or written.
    pub fn add(&mut self, draft: HardwareDraft) -> Result<(HardwareItem, PendingWrite)> {
        self.mutate("add_hardware", |inventory| add_hardware(inventory, draft))
    }

    /// Replace an existing item, matched by id
    ///
    /// # Errors
    ///
    /// `NotInitialized`, `InvalidField`, `InvalidMonthlyCost`, `NotFound` or
    /// `DuplicateSerialNumber`; in every case nothing is changed or written.
    pub fn update(&mut self, item: HardwareItem) -> Result<PendingWrite> {
        self.mutate("update_hardware", |inventory| {
            update_hardware(inventory, item)
        })
        .map(|((), write)| write)
    }

    /// Remove an item by id
    ///
    /// Unknown ids are not an error. The collection is written either way.
    ///
    /// # Errors
    ///
    /// `NotInitialized` only.
    pub fn remove(&mut self, id: &HardwareId) -> Result<(bool, PendingWrite)> {
        self.mutate("remove_hardware", |inventory| {
            Ok(remove_hardware(inventory, id))
        })
    }

    /// Wait until the most recent mutation's write has finished
    ///
    /// # Errors
    ///
    /// Returns the error of that write, if it failed.
    pub async fn flush(&self) -> Result<()> {
        let target = self.generation;
        let mut status = self.writes.status.subscribe();
        let settled = status
            .wait_for(|s| s.settled >= target)
            .await
            .map_err(|_| write_status_closed())?;
        match &settled.last_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn mutate<T>(
        &mut self,
        op: &'static str,
        apply: impl FnOnce(&mut Inventory) -> hwinv_core::Result<T>,
    ) -> Result<(T, PendingWrite)> {
        let start = Instant::now();
        log_op_start!(op);

        if !self.initialized {
            let err = not_initialized(op);
            log_op_error!(op, err, duration_ms = elapsed_ms(start));
            return Err(err);
        }

        match apply(&mut self.inventory) {
            Ok(value) => {
                let write = self.persist();
                log_op_end!(
                    op,
                    duration_ms = elapsed_ms(start),
                    item_count = self.inventory.len() as u64,
                    generation = write.generation()
                );
                Ok((value, write))
            }
            Err(err) => {
                let err = ExError::from(err).with_op(op);
                log_op_error!(op, err, duration_ms = elapsed_ms(start));
                Err(err)
            }
        }
    }

    fn persist(&mut self) -> PendingWrite {
        self.generation += 1;
        let generation = self.generation;
        let blob = encode_collection(self.inventory.items());

        let store = Arc::clone(&self.store);
        let writes = Arc::clone(&self.writes);
        let key = self.key.clone();
        let handle = self.runtime.spawn(async move {
            writes
                .write(store.as_ref(), &key, generation, blob)
                .await
        });

        PendingWrite { generation, handle }
    }

    // ===== Queries =====

    /// All items in stable insertion order
    pub fn items(&self) -> &[HardwareItem] {
        self.inventory.items()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn get(&self, id: &HardwareId) -> Option<&HardwareItem> {
        self.inventory.get(id)
    }

    /// Case-insensitive search over name, brand and model
    pub fn search(&self, query: &str) -> Vec<&HardwareItem> {
        queries::search(&self.inventory, query)
    }

    pub fn filter_by_brand(&self, brand: Option<&str>) -> Vec<&HardwareItem> {
        queries::filter_by_brand(&self.inventory, brand)
    }

    pub fn list_brands(&self) -> Vec<String> {
        queries::list_brands(&self.inventory)
    }

    pub fn stock_count(&self, name: &str) -> usize {
        queries::stock_count(&self.inventory, name)
    }

    pub fn stock_listing(&self, brand: Option<&str>, query: &str) -> Vec<StockLine<'_>> {
        queries::stock_listing(&self.inventory, brand, query)
    }

    /// Sum of monthly costs over the whole collection
    pub fn total_monthly_cost(&self) -> f64 {
        queries::total_monthly_cost(self.inventory.items())
    }

    pub fn store_key(&self) -> &str {
        &self.key
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
