//! Canonical schema constants for structured logging and events
//!
//! The logging macros and the engine emit fields under exactly these names;
//! log consumers and the test capture layer look them up by constant.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Command execution
pub const FIELD_COMMAND_WORD: &str = "command_word";
pub const FIELD_OUTCOME: &str = "outcome";

// Collection sizes
pub const FIELD_PERSON_COUNT: &str = "person_count";
pub const FIELD_POLICY_COUNT: &str = "policy_count";
pub const FIELD_TASK_COUNT: &str = "task_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Outcomes of an executed command line
pub const OUTCOME_OK: &str = "ok";
pub const OUTCOME_REJECTED: &str = "rejected";
