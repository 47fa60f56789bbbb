//! Raw implementation codes.
//!
//! These alias the API error code values. The engine must only ever report
//! one of them; anything else is treated as unclassified at the boundary.

pub const UNKNOWN: i32 = 0;
pub const NON_TRANSIENT: i32 = 1;
pub const NOT_FOUND: i32 = 2;
pub const CONSTRAINT: i32 = 3;
pub const DATA: i32 = 4;
pub const NOT_ALLOWED: i32 = 5;
pub const SERIAL: i32 = 11;
pub const RECOVERABLE: i32 = 21;
pub const TRANSIENT: i32 = 31;
pub const TIMEOUT: i32 = 32;
pub const DEADLOCK: i32 = 33;

/// Every code the engine is allowed to report, ascending.
pub const RECOGNIZED: [i32; 11] = [
    UNKNOWN,
    NON_TRANSIENT,
    NOT_FOUND,
    CONSTRAINT,
    DATA,
    NOT_ALLOWED,
    SERIAL,
    RECOVERABLE,
    TRANSIENT,
    TIMEOUT,
    DEADLOCK,
];

/// Returns `true` if `code` is one the engine may legitimately report.
pub fn is_recognized(code: i32) -> bool {
    RECOGNIZED.contains(&code)
}
