//! Canonical schema constants for structured logging
//!
//! Every event emitted by the inventory crates uses these keys, so log
//! consumers and test assertions can rely on stable names.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_HARDWARE_ID: &str = "hardware_id";
pub const FIELD_SERIAL_NUMBER: &str = "serial_number";

// Persistence
pub const FIELD_STORE_KEY: &str = "store_key";
pub const FIELD_ITEM_COUNT: &str = "item_count";
pub const FIELD_BLOB_BYTES: &str = "blob_bytes";
pub const FIELD_GENERATION: &str = "generation";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
/// A recoverable failure was absorbed and a fallback value used instead
pub const EVENT_FALLBACK: &str = "fallback";
