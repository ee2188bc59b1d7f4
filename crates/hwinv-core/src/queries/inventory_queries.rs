//! Inventory query operations
//!
//! Pure reads over an [`Inventory`]. Results borrow from the inventory and
//! keep its insertion order.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::model::HardwareItem;
use crate::ops::Inventory;

/// One row of the inventory listing: the first item with a given name plus
/// the number of items sharing that name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLine<'a> {
    pub item: &'a HardwareItem,
    pub stock: usize,
}

/// Case-insensitive substring search over `name`, `brand` and `model`
///
/// The query is trimmed first; an empty or whitespace-only query returns the
/// full collection.
pub fn search<'a>(inventory: &'a Inventory, query: &str) -> Vec<&'a HardwareItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return inventory.items().iter().collect();
    }

    inventory
        .items()
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item.brand.to_lowercase().contains(&needle)
                || item.model.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Exact, case-sensitive brand filter
///
/// `None` or an empty brand returns the full collection.
pub fn filter_by_brand<'a>(inventory: &'a Inventory, brand: Option<&str>) -> Vec<&'a HardwareItem> {
    match brand {
        Some(brand) if !brand.is_empty() => inventory
            .items()
            .iter()
            .filter(|item| item.brand == brand)
            .collect(),
        _ => inventory.items().iter().collect(),
    }
}

/// Distinct brands, sorted ascending
pub fn list_brands(inventory: &Inventory) -> Vec<String> {
    inventory
        .items()
        .iter()
        .map(|item| item.brand.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Number of items whose name equals `name` exactly
pub fn stock_count(inventory: &Inventory, name: &str) -> usize {
    inventory
        .items()
        .iter()
        .filter(|item| item.name == name)
        .count()
}

/// The inventory listing view
///
/// Applies the brand filter, then a case-insensitive substring match on
/// `name` only, then keeps the first item per distinct name. Stock counts are
/// taken over the whole collection, not just the filtered rows.
pub fn stock_listing<'a>(
    inventory: &'a Inventory,
    brand: Option<&str>,
    query: &str,
) -> Vec<StockLine<'a>> {
    let needle = query.trim().to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();

    filter_by_brand(inventory, brand)
        .into_iter()
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .filter(|item| seen.insert(item.name.as_str()))
        .map(|item| StockLine {
            item,
            stock: stock_count(inventory, &item.name),
        })
        .collect()
}

/// Sum of the monthly renting cost over the given items
pub fn total_monthly_cost<'a>(items: impl IntoIterator<Item = &'a HardwareItem>) -> f64 {
    items.into_iter().map(|item| item.monthly_renting_cost).sum()
}
