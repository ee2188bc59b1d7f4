use hwinv_core_types::HardwareId;

use crate::errors::{HwinvError, Result};
use crate::model::HardwareItem;

/// In-memory hardware collection
///
/// A plain `Vec` in insertion order: the data set is small, so lookups are
/// linear scans. Not thread-safe; the owner serializes access.
/// Mutations go through the functions in [`crate::ops::hardware_ops`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    pub(crate) items: Vec<HardwareItem>,
}

impl Inventory {
    /// Create a new empty Inventory
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build an Inventory from a previously stored collection, keeping its order
    pub fn from_items(items: Vec<HardwareItem>) -> Self {
        Self { items }
    }

    /// All items in stable iteration order
    pub fn items(&self) -> &[HardwareItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by id
    pub fn get(&self, id: &HardwareId) -> Option<&HardwareItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Get an item by id, failing if it is absent
    ///
    /// # Errors
    ///
    /// Returns `HardwareNotFound` if no item has this id.
    pub fn get_required(&self, id: &HardwareId) -> Result<&HardwareItem> {
        self.get(id).ok_or_else(|| HwinvError::HardwareNotFound {
            hardware_id: id.to_string(),
        })
    }

    /// Check if an item with this id exists
    pub fn contains(&self, id: &HardwareId) -> bool {
        self.get(id).is_some()
    }

    /// Find the item carrying this serial number (case-insensitive)
    pub fn find_by_serial(&self, serial_number: &str) -> Option<&HardwareItem> {
        self.items.iter().find(|item| item.has_serial(serial_number))
    }

    pub(crate) fn position(&self, id: &HardwareId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub(crate) fn push(&mut self, item: HardwareItem) {
        self.items.push(item);
    }
}
