//! The closed set of API error codes.
//!
//! Values are part of the public contract: scripts compare against the
//! literal integers, so a variant's discriminant must never change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error codes defined by the Indexed Database API.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ErrorCode {
    Unknown = 0,
    NonTransient = 1,
    NotFound = 2,
    Constraint = 3,
    Data = 4,
    NotAllowed = 5,
    Serial = 11,
    Recoverable = 21,
    Transient = 31,
    Timeout = 32,
    Deadlock = 33,
}

/// Whether retrying an operation unchanged may succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RetryClass {
    Retryable,
    NonRetryable,
}

impl RetryClass {
    pub fn label(self) -> &'static str {
        match self {
            Self::Retryable => "retryable",
            Self::NonRetryable => "non-retryable",
        }
    }
}

/// A raw integer that is not one of the eleven API codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized error code {0}")]
pub struct UnrecognizedCode(pub i32);

/// Text that is neither a code value nor a code name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse {0:?} as an error code")]
pub struct ParseCodeError(pub String);

impl ErrorCode {
    /// All codes in ascending numeric order.
    pub const ALL: [ErrorCode; 11] = [
        Self::Unknown,
        Self::NonTransient,
        Self::NotFound,
        Self::Constraint,
        Self::Data,
        Self::NotAllowed,
        Self::Serial,
        Self::Recoverable,
        Self::Transient,
        Self::Timeout,
        Self::Deadlock,
    ];

    /// The stable numeric value.
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Validated conversion from a raw integer.
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Unknown),
            1 => Some(Self::NonTransient),
            2 => Some(Self::NotFound),
            3 => Some(Self::Constraint),
            4 => Some(Self::Data),
            5 => Some(Self::NotAllowed),
            11 => Some(Self::Serial),
            21 => Some(Self::Recoverable),
            31 => Some(Self::Transient),
            32 => Some(Self::Timeout),
            33 => Some(Self::Deadlock),
            _ => None,
        }
    }

    /// Like [`from_value`](Self::from_value), but fails closed to `Unknown`.
    pub fn from_value_or_unknown(value: i32) -> Self {
        Self::from_value(value).unwrap_or_else(|| {
            tracing::warn!(raw_code = value, "unrecognized error code, reporting UNKNOWN_ERR");
            Self::Unknown
        })
    }

    /// The name scripts see, e.g. `TIMEOUT_ERR`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN_ERR",
            Self::NonTransient => "NON_TRANSIENT_ERR",
            Self::NotFound => "NOT_FOUND_ERR",
            Self::Constraint => "CONSTRAINT_ERR",
            Self::Data => "DATA_ERR",
            Self::NotAllowed => "NOT_ALLOWED_ERR",
            Self::Serial => "SERIAL_ERR",
            Self::Recoverable => "RECOVERABLE_ERR",
            Self::Transient => "TRANSIENT_ERR",
            Self::Timeout => "TIMEOUT_ERR",
            Self::Deadlock => "DEADLOCK_ERR",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Unknown => "unclassified failure",
            Self::NonTransient => "failure will recur if retried unchanged",
            Self::NotFound => "requested entity does not exist",
            Self::Constraint => "uniqueness or integrity constraint violated",
            Self::Data => "malformed or invalid data supplied",
            Self::NotAllowed => "operation forbidden in the current state",
            Self::Serial => "serialization or versioning failure",
            Self::Recoverable => "recoverable failure, safe to retry",
            Self::Transient => "temporary failure, expected to clear",
            Self::Timeout => "operation exceeded its allotted time",
            Self::Deadlock => "mutual-exclusion conflict detected",
        }
    }

    pub const fn class(self) -> RetryClass {
        match self {
            Self::Recoverable | Self::Transient | Self::Timeout | Self::Deadlock => {
                RetryClass::Retryable
            }
            Self::Unknown
            | Self::NonTransient
            | Self::NotFound
            | Self::Constraint
            | Self::Data
            | Self::NotAllowed
            | Self::Serial => RetryClass::NonRetryable,
        }
    }

    /// Returns true if callers may retry the failed operation.
    pub const fn is_retryable(self) -> bool {
        matches!(self.class(), RetryClass::Retryable)
    }
}

/// Renders the decimal value; this is also the default error message.
impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.value()
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = UnrecognizedCode;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(UnrecognizedCode(value))
    }
}

/// Accepts either the decimal value (`"32"`) or the name (`"TIMEOUT_ERR"`).
impl FromStr for ErrorCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i32>() {
            return Self::from_value(value).ok_or_else(|| ParseCodeError(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|code| code.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseCodeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_are_stable() {
        let values: Vec<i32> = ErrorCode::ALL.iter().map(|c| c.value()).collect();
        assert_eq!(values, [0, 1, 2, 3, 4, 5, 11, 21, 31, 32, 33]);
    }

    #[test]
    fn try_from_accepts_exactly_the_closed_set() {
        for raw in -5..=40 {
            let expected = ErrorCode::ALL.iter().any(|c| c.value() == raw);
            assert_eq!(ErrorCode::try_from(raw).is_ok(), expected, "raw {raw}");
        }
        assert_eq!(ErrorCode::try_from(12), Err(UnrecognizedCode(12)));
    }

    #[test]
    fn out_of_range_fails_closed() {
        assert_eq!(ErrorCode::from_value_or_unknown(99), ErrorCode::Unknown);
        assert_eq!(ErrorCode::from_value_or_unknown(-1), ErrorCode::Unknown);
        assert_eq!(ErrorCode::from_value_or_unknown(33), ErrorCode::Deadlock);
    }

    #[test]
    fn display_is_decimal_and_parses_back() {
        for code in ErrorCode::ALL {
            let text = code.to_string();
            assert_eq!(text, code.value().to_string());
            assert_eq!(text.parse::<ErrorCode>(), Ok(code));
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("TIMEOUT_ERR".parse::<ErrorCode>(), Ok(ErrorCode::Timeout));
        assert_eq!("not_found_err".parse::<ErrorCode>(), Ok(ErrorCode::NotFound));
        assert!("TIMEOUT".parse::<ErrorCode>().is_err());
        assert!("12".parse::<ErrorCode>().is_err());
        assert!("".parse::<ErrorCode>().is_err());
    }

    #[test]
    fn retry_partition() {
        let retryable: Vec<ErrorCode> = ErrorCode::ALL
            .into_iter()
            .filter(|c| c.is_retryable())
            .collect();
        assert_eq!(
            retryable,
            [
                ErrorCode::Recoverable,
                ErrorCode::Transient,
                ErrorCode::Timeout,
                ErrorCode::Deadlock
            ]
        );
        assert_eq!(ErrorCode::Serial.class(), RetryClass::NonRetryable);
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&ErrorCode::Timeout).unwrap(), "32");
        let code: ErrorCode = serde_json::from_str("11").unwrap();
        assert_eq!(code, ErrorCode::Serial);
        assert!(serde_json::from_str::<ErrorCode>("7").is_err());
    }

    #[test]
    fn names_match_the_engine_code_space() {
        for (code, raw) in ErrorCode::ALL.into_iter().zip(idb_impl::codes::RECOGNIZED) {
            assert_eq!(code.value(), raw, "{}", code.name());
        }
    }
}
