//! Error handling for hwinv-store
//!
//! Wraps hwinv-core ExError with store-specific helpers

use hwinv_core::errors::{ExError, ExErrorKind, HwinvError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a persistent-store read error
pub fn read_failed(key: &str, reason: impl Into<String>) -> ExError {
    HwinvError::PersistenceRead {
        key: key.to_string(),
        reason: reason.into(),
    }
    .into()
}

/// Create a persistent-store write error
pub fn write_failed(key: &str, reason: impl Into<String>) -> ExError {
    HwinvError::PersistenceWrite {
        key: key.to_string(),
        reason: reason.into(),
    }
    .into()
}

/// Create a codec error from serde_json::Error
pub fn codec_error(err: serde_json::Error) -> ExError {
    ExError::from(HwinvError::Serialization {
        reason: err.to_string(),
    })
    .with_op("codec")
}

/// Create an error for a key that cannot be mapped onto the store
pub fn invalid_key(key: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidField)
        .with_op("kv_key")
        .with_entity_id(key)
        .with_message("Store keys may only contain ASCII letters, digits, '-', '_' and '.'")
}

/// Create an error for a mutation attempted before initialize()
pub fn not_initialized(op: &str) -> ExError {
    ExError::from(HwinvError::NotInitialized).with_op(op)
}

/// Create an error for a background write task that did not complete
pub fn task_failed(err: tokio::task::JoinError) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op("persist")
        .with_message(format!("Write task did not complete: {}", err))
}

/// Create an error for a repository constructed outside a Tokio runtime
pub fn no_runtime(err: tokio::runtime::TryCurrentError) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op("repository_new")
        .with_message(format!("Background writes need a Tokio runtime: {}", err))
}

/// Create an error for a flush whose write status channel went away
pub fn write_status_closed() -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op("flush")
        .with_message("Write status channel closed")
}
