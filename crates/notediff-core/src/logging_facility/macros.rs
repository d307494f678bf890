//! Operation boundary logging macros
//!
//! Every public operation that can fail logs one `start` event and exactly
//! one of `end` / `end_error`. Extra `key = value` fields are passed through
//! to `tracing` unchanged, so `%` and `?` sigils work as usual.

/// Shared body of the `log_op_*` macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:ident $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::$event,
            $($($field)*)?
        )
    };
}

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use notediff_core::log_op_start;
/// log_op_start!("apply");
/// log_op_start!("apply", block_count = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(info, $op, EVENT_START $(, $($field)*)?)
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use notediff_core::log_op_end;
/// log_op_end!("apply", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `ExError` and records its kind and
/// stable code.
///
/// # Example
///
/// ```
/// # use notediff_core::log_op_error;
/// use notediff_core::errors::{ExError, ExErrorKind};
/// let err = ExError::new(ExErrorKind::UnknownBlock);
/// log_op_error!("toggle_block", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            error,
            $op,
            EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code()
            $(, $($field)*)?
        )
    }};
}
