//! Blob codec for the stored collection
//!
//! The whole collection is stored as one JSON array of `HardwareItem` under a
//! single key. There is no schema version tag.

use hwinv_core::HardwareItem;

use crate::errors::{codec_error, Result};

/// Key under which the collection is stored
pub const STORAGE_KEY: &str = "hardware";

/// Serialize the full collection
pub fn encode_collection(items: &[HardwareItem]) -> Result<String> {
    serde_json::to_string(items).map_err(codec_error)
}

/// Parse a stored collection
///
/// Any shape other than an array of items is an error; the caller decides
/// how to recover.
pub fn decode_collection(blob: &str) -> Result<Vec<HardwareItem>> {
    serde_json::from_str(blob).map_err(codec_error)
}
