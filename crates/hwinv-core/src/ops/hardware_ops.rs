use hwinv_core_types::HardwareId;

use super::inventory::Inventory;
use crate::errors::{HwinvError, Result};
use crate::model::{HardwareDraft, HardwareItem};
use crate::rules::{validate_draft, validate_item};

/// Add a new hardware item
///
/// Validates the draft, rejects serial numbers already present in the
/// collection (case-insensitive), assigns a fresh UUID v7 id and appends the
/// item.
///
/// # Arguments
/// * `inventory` - Mutable reference to the Inventory
/// * `draft` - The candidate item without an id
///
/// # Returns
/// The stored item, including its assigned id
///
/// # Errors
/// * `InvalidField` / `InvalidMonthlyCost` - if the draft fails validation
/// * `DuplicateSerialNumber` - if another item has the same serial number
///
/// On error the inventory is unchanged.
pub fn add_hardware(inventory: &mut Inventory, draft: HardwareDraft) -> Result<HardwareItem> {
    validate_draft(&draft)?;

    if let Some(existing) = inventory.find_by_serial(&draft.serial_number) {
        return Err(HwinvError::DuplicateSerialNumber {
            serial_number: draft.serial_number,
            existing_id: existing.id.to_string(),
        });
    }

    let item = draft.into_item(HardwareId::generate());
    inventory.push(item.clone());

    Ok(item)
}

/// Replace an existing item wholesale
///
/// The item is matched by `item.id`; every other field is replaced. The serial
/// number must stay unique against all *other* items, so an item can keep (or
/// re-case) its own serial.
///
/// # Errors
/// * `InvalidField` / `InvalidMonthlyCost` - if the item fails validation
/// * `HardwareNotFound` - if no item has this id
/// * `DuplicateSerialNumber` - if a different item has the same serial number
///
/// On error the inventory is unchanged.
pub fn update_hardware(inventory: &mut Inventory, item: HardwareItem) -> Result<()> {
    validate_item(&item)?;

    let index = inventory
        .position(&item.id)
        .ok_or_else(|| HwinvError::HardwareNotFound {
            hardware_id: item.id.to_string(),
        })?;

    if let Some(other) = inventory
        .items()
        .iter()
        .find(|other| other.id != item.id && other.has_serial(&item.serial_number))
    {
        return Err(HwinvError::DuplicateSerialNumber {
            serial_number: item.serial_number,
            existing_id: other.id.to_string(),
        });
    }

    let (id, draft) = item.into_parts();
    inventory.items[index] = draft.into_item(id);

    Ok(())
}

/// Remove an item by id
///
/// Removing an unknown id is a no-op.
///
/// # Returns
/// `true` if an item was removed
pub fn remove_hardware(inventory: &mut Inventory, id: &HardwareId) -> bool {
    let before = inventory.items.len();
    inventory.items.retain(|item| &item.id != id);
    inventory.items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_id() {
        let mut inventory = Inventory::new();
        let item = add_hardware(
            &mut inventory,
            HardwareDraft::new("Laptop", "Acme", "X1", "SN-1", 20.0),
        )
        .unwrap();

        assert!(!item.id.as_str().is_empty());
        assert_eq!(inventory.get(&item.id), Some(&item));
    }

    #[test]
    fn test_update_keeps_position() {
        let mut inventory = Inventory::new();
        let first = add_hardware(
            &mut inventory,
            HardwareDraft::new("Laptop", "Acme", "X1", "SN-1", 20.0),
        )
        .unwrap();
        add_hardware(
            &mut inventory,
            HardwareDraft::new("Monitor", "Acme", "M1", "SN-2", 5.0),
        )
        .unwrap();

        let mut changed = first.clone();
        changed.name = "Laptop Pro".to_string();
        update_hardware(&mut inventory, changed).unwrap();

        assert_eq!(inventory.items()[0].id, first.id);
        assert_eq!(inventory.items()[0].name, "Laptop Pro");
    }

    #[test]
    fn test_remove_reports_whether_removed() {
        let mut inventory = Inventory::new();
        let item = add_hardware(
            &mut inventory,
            HardwareDraft::new("Laptop", "Acme", "X1", "SN-1", 20.0),
        )
        .unwrap();

        assert!(remove_hardware(&mut inventory, &item.id));
        assert!(!remove_hardware(&mut inventory, &item.id));
    }
}
