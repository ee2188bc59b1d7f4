use std::sync::Arc;

use hwinv_core::{HardwareDraft, HardwareItem};
use hwinv_store::{HardwareRepository, KeyValueStore, MemoryKv};

/// A draft with full control over the visible fields
#[allow(dead_code)]
pub fn draft(name: &str, brand: &str, model: &str, serial: &str, cost: f64) -> HardwareDraft {
    HardwareDraft::new(name, brand, model, serial, cost)
}

/// Create an initialized repository over an empty in-memory store
#[allow(dead_code)]
pub async fn memory_repo() -> (Arc<MemoryKv>, HardwareRepository<MemoryKv>) {
    let kv = Arc::new(MemoryKv::new());
    let mut repo = HardwareRepository::new(Arc::clone(&kv)).unwrap();
    repo.initialize().await;
    (kv, repo)
}

/// Open and initialize a fresh repository over an existing store
#[allow(dead_code)]
pub async fn reopen<S: KeyValueStore + 'static>(store: Arc<S>) -> HardwareRepository<S> {
    let mut repo = HardwareRepository::new(store).unwrap();
    repo.initialize().await;
    repo
}

/// Add a draft and wait for its write, panicking on failure
#[allow(dead_code)]
pub async fn add_durably<S: KeyValueStore + ?Sized + 'static>(
    repo: &mut HardwareRepository<S>,
    draft: HardwareDraft,
) -> HardwareItem {
    let (item, write) = repo.add(draft).expect("test draft should be valid");
    write.await.expect("write should succeed");
    item
}

/// Fill a repository with a small mixed catalogue
///
/// Order: Laptop/Acme, Monitor/Globex, Laptop/Acme, Keyboard/Initech
#[allow(dead_code)]
pub async fn seed_sample<S: KeyValueStore + ?Sized + 'static>(
    repo: &mut HardwareRepository<S>,
) -> Vec<HardwareItem> {
    vec![
        add_durably(repo, draft("Laptop", "Acme", "X1 Carbon", "SN-1", 20.0)).await,
        add_durably(repo, draft("Monitor", "Globex", "G27", "SN-2", 7.5)).await,
        add_durably(repo, draft("Laptop", "Acme", "X1 Yoga", "SN-3", 22.0)).await,
        add_durably(repo, draft("Keyboard", "Initech", "K-100", "SN-4", 1.0)).await,
    ]
}
