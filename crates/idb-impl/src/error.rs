//! Implementation-layer error type.
//!
//! `ImplementationError` is what the engine raises. It carries whatever the
//! engine knew at the failure site, so its message may contain internal
//! detail (key paths, file names, lock owners). The API layer decides how
//! much of it reaches the caller.

use crate::codes;

/// Failure raised by the storage engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (code {code})")]
pub struct ImplementationError {
    /// Raw code, expected to be one of [`codes::RECOGNIZED`].
    pub code: i32,
    /// Engine-provided description.
    pub message: String,
}

/// Result alias for engine operations.
pub type ImplResult<T> = Result<T, ImplementationError>;

impl ImplementationError {
    /// Creates an error with a raw code.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(codes::UNKNOWN, message)
    }

    pub fn non_transient(message: impl Into<String>) -> Self {
        Self::new(codes::NON_TRANSIENT, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(codes::NOT_FOUND, message)
    }

    pub fn constraint(message: impl Into<String>) -> Self {
        Self::new(codes::CONSTRAINT, message)
    }

    pub fn data(message: impl Into<String>) -> Self {
        Self::new(codes::DATA, message)
    }

    pub fn not_allowed(message: impl Into<String>) -> Self {
        Self::new(codes::NOT_ALLOWED, message)
    }

    pub fn serial(message: impl Into<String>) -> Self {
        Self::new(codes::SERIAL, message)
    }

    pub fn recoverable(message: impl Into<String>) -> Self {
        Self::new(codes::RECOVERABLE, message)
    }

    pub fn transient(message: impl Into<String>) -> Self {
        Self::new(codes::TRANSIENT, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(codes::TIMEOUT, message)
    }

    pub fn deadlock(message: impl Into<String>) -> Self {
        Self::new(codes::DEADLOCK, message)
    }

    /// Whether the code is inside the recognized code space.
    pub fn has_recognized_code(&self) -> bool {
        codes::is_recognized(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code() {
        let err = ImplementationError::timeout("lock wait exceeded");
        assert_eq!(err.to_string(), "lock wait exceeded (code 32)");
    }

    #[test]
    fn named_constructors_use_matching_codes() {
        let pairs = [
            (ImplementationError::unknown("x"), codes::UNKNOWN),
            (ImplementationError::non_transient("x"), codes::NON_TRANSIENT),
            (ImplementationError::not_found("x"), codes::NOT_FOUND),
            (ImplementationError::constraint("x"), codes::CONSTRAINT),
            (ImplementationError::data("x"), codes::DATA),
            (ImplementationError::not_allowed("x"), codes::NOT_ALLOWED),
            (ImplementationError::serial("x"), codes::SERIAL),
            (ImplementationError::recoverable("x"), codes::RECOVERABLE),
            (ImplementationError::transient("x"), codes::TRANSIENT),
            (ImplementationError::timeout("x"), codes::TIMEOUT),
            (ImplementationError::deadlock("x"), codes::DEADLOCK),
        ];
        for (err, code) in pairs {
            assert_eq!(err.code, code);
            assert!(err.has_recognized_code());
        }
    }

    #[test]
    fn raw_code_outside_space_is_flagged() {
        let err = ImplementationError::new(99, "corrupt page header");
        assert!(!err.has_recognized_code());
    }
}
