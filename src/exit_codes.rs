//! Exit code constants for the qbgen CLI.
//!
//! - 0: Success (skipped records do not affect the exit code)
//! - 1: User error (bad args, invalid config)
//! - 2: Input error (question bank or template file unreadable)
//! - 3: Record failure (at least one record could not be rendered or written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Input error: a question bank or template file could not be read or parsed.
pub const INPUT_ERROR: i32 = 2;

/// Record failure: a question folder could not be rendered or written.
pub const RECORD_FAILURE: i32 = 3;
