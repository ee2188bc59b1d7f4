//! Identifier types for inventory records

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a single hardware item
///
/// New ids are UUIDv7 strings. Any non-empty string is accepted when loading
/// stored data, so records written with other id schemes stay addressable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HardwareId(String);

impl HardwareId {
    /// Generate a fresh, time-ordered id
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap an existing id (from storage or user input)
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::fmt::Display for HardwareId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HardwareId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for HardwareId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
