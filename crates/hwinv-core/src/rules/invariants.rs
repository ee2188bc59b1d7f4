use std::collections::BTreeMap;

use crate::model::HardwareItem;

/// Find serial numbers shared by more than one item (case-insensitive)
///
/// Returns `(lowercased serial, ids)` pairs in serial order. Mutations never
/// create duplicates, but collections written by older builds may contain them.
pub fn find_duplicate_serials(items: &[HardwareItem]) -> Vec<(String, Vec<String>)> {
    let mut by_serial: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for item in items {
        by_serial
            .entry(item.serial_number.to_lowercase())
            .or_default()
            .push(item.id.to_string());
    }

    by_serial
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .collect()
}

/// Find ids used by more than one item
pub fn find_duplicate_ids(items: &[HardwareItem]) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(item.id.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(id, _)| id.to_string())
        .collect()
}
