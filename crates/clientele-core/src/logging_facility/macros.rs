//! Canonical logging macros
//!
//! Every event carries `component`, `op` and `event`; end events add
//! `duration_ms`. The names and event values are those in
//! `clientele_core_types::schema`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use clientele_core::log_op_start;
/// log_op_start!("add_person");
/// log_op_start!("delete_policy", index = 2);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = clientele_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = clientele_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use clientele_core::log_op_end;
/// log_op_end!("add_person", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = clientele_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = clientele_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error is converted into an `ExError` so the log line carries the
/// stable kind and code rather than the user-facing message.
///
/// # Example
///
/// ```
/// # use clientele_core::{log_op_error, errors::ClienteleError, model::EntityKind};
/// let err = ClienteleError::Duplicate { entity: EntityKind::Person };
/// log_op_error!("add_person", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = clientele_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = clientele_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}

/// Log the end of an operation whose input was turned down
///
/// Rejected input is an expected outcome of a command line, so it ends the
/// operation at info level with `outcome = "rejected"` and the stable error
/// code, rather than as an `end_error` event.
///
/// # Example
///
/// ```
/// # use clientele_core::{log_op_rejected, errors::ClienteleError};
/// let err = ClienteleError::InvalidIndexFormat;
/// log_op_rejected!("execute", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_rejected {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = clientele_core_types::schema::EVENT_END,
            duration_ms = $duration,
            outcome = clientele_core_types::schema::OUTCOME_REJECTED,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = clientele_core_types::schema::EVENT_END,
            duration_ms = $duration,
            outcome = clientele_core_types::schema::OUTCOME_REJECTED,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}
