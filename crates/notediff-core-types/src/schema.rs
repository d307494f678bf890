//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Diff dimensions
pub const FIELD_ORIGINAL_LINES: &str = "original_lines";
pub const FIELD_NEW_LINES: &str = "new_lines";
pub const FIELD_DIFF_LEN: &str = "diff_len";
pub const FIELD_BLOCK_COUNT: &str = "block_count";
pub const FIELD_SELECTED_COUNT: &str = "selected_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
