use hwinv_core_types::HardwareId;
use serde::{Deserialize, Serialize};

/// A single tracked physical asset
///
/// Serialized with camelCase keys; this is the shape stored in the
/// persistent store blob. Text fields are kept exactly as supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareItem {
    /// Assigned at creation, immutable afterwards
    pub id: HardwareId,

    /// Display label; several units of the same hardware share a name
    pub name: String,

    pub brand: String,

    pub model: String,

    /// Unique within the collection, compared case-insensitively
    pub serial_number: String,

    /// Monthly rent, non-negative
    #[serde(alias = "monthlyRent")]
    pub monthly_renting_cost: f64,

    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl HardwareItem {
    /// Check whether this item carries the given serial number (case-insensitive)
    pub fn has_serial(&self, serial_number: &str) -> bool {
        same_serial(&self.serial_number, serial_number)
    }

    /// Split the item into its id and the replaceable fields
    pub fn into_parts(self) -> (HardwareId, HardwareDraft) {
        let draft = HardwareDraft {
            name: self.name,
            brand: self.brand,
            model: self.model,
            serial_number: self.serial_number,
            monthly_renting_cost: self.monthly_renting_cost,
            details: self.details,
        };
        (self.id, draft)
    }
}

/// A hardware item that has not been assigned an id yet
///
/// This is the candidate accepted by the add operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareDraft {
    pub name: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    #[serde(alias = "monthlyRent")]
    pub monthly_renting_cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl HardwareDraft {
    /// Create a draft with all required fields and no details
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        serial_number: impl Into<String>,
        monthly_renting_cost: f64,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            model: model.into(),
            serial_number: serial_number.into(),
            monthly_renting_cost,
            details: None,
        }
    }

    /// Attach a free-text note
    ///
    /// Blank notes are dropped so that "no details" has a single representation.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = normalize_details(Some(details.into()));
        self
    }

    /// Turn the draft into a stored item under the given id
    pub fn into_item(self, id: HardwareId) -> HardwareItem {
        HardwareItem {
            id,
            name: self.name,
            brand: self.brand,
            model: self.model,
            serial_number: self.serial_number,
            monthly_renting_cost: self.monthly_renting_cost,
            details: normalize_details(self.details),
        }
    }
}

/// Case-insensitive serial number comparison
pub fn same_serial(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub(crate) fn normalize_details(details: Option<String>) -> Option<String> {
    details.filter(|d| !d.trim().is_empty())
}
