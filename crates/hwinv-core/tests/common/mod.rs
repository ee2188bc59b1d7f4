use hwinv_core::ops::{add_hardware, Inventory};
use hwinv_core::{HardwareDraft, HardwareItem};

/// Create a new empty Inventory for testing
#[allow(dead_code)]
pub fn new_inventory() -> Inventory {
    Inventory::new()
}

/// A valid draft with the given name and serial number
#[allow(dead_code)]
pub fn draft(name: &str, serial: &str) -> HardwareDraft {
    HardwareDraft::new(name, "Acme", "X1", serial, 20.0)
}

/// A valid draft with full control over brand and model
#[allow(dead_code)]
pub fn draft_full(name: &str, brand: &str, model: &str, serial: &str, cost: f64) -> HardwareDraft {
    HardwareDraft::new(name, brand, model, serial, cost)
}

/// Add a draft through the real add operation, panicking on failure
#[allow(dead_code)]
pub fn add(inventory: &mut Inventory, draft: HardwareDraft) -> HardwareItem {
    add_hardware(inventory, draft).expect("test draft should be valid")
}

/// An inventory pre-filled with a small mixed catalogue
///
/// Order: Laptop/Acme, Monitor/Globex, Laptop/Acme, Keyboard/Initech
#[allow(dead_code)]
pub fn sample_inventory() -> Inventory {
    let mut inventory = Inventory::new();
    add(&mut inventory, draft_full("Laptop", "Acme", "X1 Carbon", "SN-1", 20.0));
    add(&mut inventory, draft_full("Monitor", "Globex", "G27", "SN-2", 7.5));
    add(&mut inventory, draft_full("Laptop", "Acme", "X1 Yoga", "SN-3", 22.0));
    add(&mut inventory, draft_full("Keyboard", "Initech", "K-100", "SN-4", 1.0));
    inventory
}
