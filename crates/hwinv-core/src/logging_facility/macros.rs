//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use hwinv_core::log_op_start;
/// log_op_start!("add_hardware");
/// log_op_start!("add_hardware", serial_number = "SN-1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::hwinv_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::hwinv_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use hwinv_core::log_op_end;
/// log_op_end!("add_hardware", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::hwinv_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::hwinv_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts either a `HwinvError` or an `ExError`; the error is not consumed.
///
/// # Example
///
/// ```
/// # use hwinv_core::log_op_error;
/// # use hwinv_core::errors::HwinvError;
/// let err = HwinvError::HardwareNotFound { hardware_id: "hw-1".to_string() };
/// log_op_error!("update_hardware", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err = $crate::errors::ExError::from($err.clone());
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::hwinv_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            error = %ex_err,
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err = $crate::errors::ExError::from($err.clone());
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::hwinv_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            error = %ex_err,
            $($field)*
        );
    }};
}
