use thiserror::Error;

/// Result type alias using HwinvError
pub type Result<T> = std::result::Result<T, HwinvError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (the CLI, tests, any
/// future UI) can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidField,
    InvalidMonthlyCost,

    // Collection integrity
    DuplicateSerialNumber,
    NotFound,

    // Lifecycle
    NotInitialized,

    // Persistence
    Serialization,
    PersistenceRead,
    PersistenceWrite,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidField => "ERR_INVALID_FIELD",
            ExErrorKind::InvalidMonthlyCost => "ERR_INVALID_MONTHLY_COST",
            ExErrorKind::DuplicateSerialNumber => "ERR_DUPLICATE_SERIAL_NUMBER",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::NotInitialized => "ERR_NOT_INITIALIZED",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::PersistenceRead => "ERR_PERSISTENCE_READ",
            ExErrorKind::PersistenceWrite => "ERR_PERSISTENCE_WRITE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether the error blocks a mutation before any state changes
    ///
    /// Validation and integrity errors are raised synchronously to the caller.
    /// Persistence errors happen after the in-memory mutation has been applied.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidField
                | ExErrorKind::InvalidMonthlyCost
                | ExErrorKind::DuplicateSerialNumber
                | ExErrorKind::NotFound
                | ExErrorKind::NotInitialized
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional operation and entity context.
#[derive(Debug, Clone, PartialEq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (hardware id or serial number)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for inventory operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HwinvError {
    // ===== Validation Errors =====
    /// A required text field is empty or whitespace-only
    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Monthly renting cost is negative, not finite, or not a number
    #[error("Invalid monthly renting cost '{value}': {reason}")]
    InvalidMonthlyCost { value: String, reason: String },

    // ===== Integrity Errors =====
    /// Another item already carries this serial number (case-insensitive)
    #[error("Serial number must be unique: '{serial_number}' is already used by {existing_id}")]
    DuplicateSerialNumber {
        serial_number: String,
        existing_id: String,
    },

    /// No item with this id exists
    #[error("Hardware not found: {hardware_id}")]
    HardwareNotFound { hardware_id: String },

    // ===== Lifecycle Errors =====
    /// A mutation was attempted before the collection was loaded
    #[error("Inventory is not initialized; call initialize() first")]
    NotInitialized,

    // ===== Persistence Errors =====
    /// The persistent store could not be read
    #[error("Failed to read '{key}' from persistent store: {reason}")]
    PersistenceRead { key: String, reason: String },

    /// The persistent store rejected a write
    #[error("Failed to write '{key}' to persistent store: {reason}")]
    PersistenceWrite { key: String, reason: String },

    /// The stored collection could not be encoded or decoded
    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },
}

impl HwinvError {
    /// Get the canonical kind for this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            HwinvError::InvalidField { .. } => ExErrorKind::InvalidField,
            HwinvError::InvalidMonthlyCost { .. } => ExErrorKind::InvalidMonthlyCost,
            HwinvError::DuplicateSerialNumber { .. } => ExErrorKind::DuplicateSerialNumber,
            HwinvError::HardwareNotFound { .. } => ExErrorKind::NotFound,
            HwinvError::NotInitialized => ExErrorKind::NotInitialized,
            HwinvError::PersistenceRead { .. } => ExErrorKind::PersistenceRead,
            HwinvError::PersistenceWrite { .. } => ExErrorKind::PersistenceWrite,
            HwinvError::Serialization { .. } => ExErrorKind::Serialization,
        }
    }
}

impl From<HwinvError> for ExError {
    fn from(err: HwinvError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            HwinvError::InvalidField { field, .. } => ExError::new(kind)
                .with_op("validate")
                .with_entity_id(field)
                .with_message(message),

            HwinvError::InvalidMonthlyCost { .. } => ExError::new(kind)
                .with_op("validate")
                .with_entity_id("monthlyRentingCost")
                .with_message(message),

            HwinvError::DuplicateSerialNumber { serial_number, .. } => ExError::new(kind)
                .with_entity_id(serial_number)
                .with_message(message),

            HwinvError::HardwareNotFound { hardware_id } => ExError::new(kind)
                .with_entity_id(hardware_id)
                .with_message(message),

            HwinvError::NotInitialized => ExError::new(kind).with_message(message),

            HwinvError::PersistenceRead { key, .. } => ExError::new(kind)
                .with_op("store_get")
                .with_entity_id(key)
                .with_message(message),

            HwinvError::PersistenceWrite { key, .. } => ExError::new(kind)
                .with_op("store_set")
                .with_entity_id(key)
                .with_message(message),

            HwinvError::Serialization { .. } => ExError::new(kind).with_message(message),
        }
    }
}

impl From<&HwinvError> for ExError {
    fn from(err: &HwinvError) -> Self {
        err.clone().into()
    }
}
