//! API-level error that is safe to hand to a script environment.
//!
//! `DatabaseError` is built at the API boundary from one of four sources:
//! a bare code, a message and code, an [`ImplementationError`], or an
//! `ImplementationError` with a caller-chosen message. It is immutable once
//! built and never keeps the implementation error around as its source.

use idb_impl::ImplementationError;

use crate::code::ErrorCode;

/// Error surfaced to callers of the database API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct DatabaseError {
    code: ErrorCode,
    message: String,
    /// Text handed to the host's script-error mechanism. Differs from
    /// `message` only for errors built with [`DatabaseError::with_override`].
    host_message: String,
}

/// Result alias for API-layer operations.
pub type ApiResult<T> = Result<T, DatabaseError>;

impl DatabaseError {
    /// Builds an error whose message is the decimal code value.
    pub fn from_code(code: ErrorCode) -> Self {
        let message = code.to_string();
        Self {
            code,
            host_message: message.clone(),
            message,
        }
    }

    /// Builds an error with the given message and code.
    pub fn new(message: impl Into<String>, code: ErrorCode) -> Self {
        let message = message.into();
        Self {
            code,
            host_message: message.clone(),
            message,
        }
    }

    /// Builds an `UNKNOWN_ERR` for failures that arrive without a code.
    pub fn unclassified(message: impl Into<String>) -> Self {
        Self::new(message, ErrorCode::Unknown)
    }

    /// Translates an implementation error, keeping its message.
    pub fn from_implementation(cause: &ImplementationError) -> Self {
        Self {
            code: translate_code(cause),
            message: cause.message.clone(),
            host_message: cause.message.clone(),
        }
    }

    /// Translates an implementation error under a caller-chosen message.
    ///
    /// The resulting message is `"<message> (implementation reported <cause>)"`.
    /// The host text stays the implementation's own message.
    pub fn with_override(message: impl Into<String>, cause: &ImplementationError) -> Self {
        let code = translate_code(cause);
        Self {
            code,
            message: format!(
                "{} (implementation reported {})",
                message.into(),
                cause.message
            ),
            host_message: cause.message.clone(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Text the host's base script error is initialised with.
    pub fn host_message(&self) -> &str {
        &self.host_message
    }

    pub fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }

    // --- Named code constants for the host environment ---

    pub fn unknown_err(&self) -> ErrorCode {
        ErrorCode::Unknown
    }

    pub fn non_transient_err(&self) -> ErrorCode {
        ErrorCode::NonTransient
    }

    pub fn not_found_err(&self) -> ErrorCode {
        ErrorCode::NotFound
    }

    pub fn constraint_err(&self) -> ErrorCode {
        ErrorCode::Constraint
    }

    pub fn data_err(&self) -> ErrorCode {
        ErrorCode::Data
    }

    pub fn not_allowed_err(&self) -> ErrorCode {
        ErrorCode::NotAllowed
    }

    pub fn serial_err(&self) -> ErrorCode {
        ErrorCode::Serial
    }

    pub fn recoverable_err(&self) -> ErrorCode {
        ErrorCode::Recoverable
    }

    pub fn transient_err(&self) -> ErrorCode {
        ErrorCode::Transient
    }

    pub fn timeout_err(&self) -> ErrorCode {
        ErrorCode::Timeout
    }

    pub fn deadlock_err(&self) -> ErrorCode {
        ErrorCode::Deadlock
    }
}

fn translate_code(cause: &ImplementationError) -> ErrorCode {
    if !cause.has_recognized_code() {
        tracing::warn!(
            raw_code = cause.code,
            "implementation reported an unrecognized code, using UNKNOWN_ERR"
        );
    }
    let code = ErrorCode::from_value(cause.code).unwrap_or(ErrorCode::Unknown);
    tracing::debug!(code = code.value(), name = code.name(), "translated implementation error");
    code
}

impl From<ErrorCode> for DatabaseError {
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code)
    }
}

impl From<ImplementationError> for DatabaseError {
    fn from(cause: ImplementationError) -> Self {
        Self::from_implementation(&cause)
    }
}

impl From<&ImplementationError> for DatabaseError {
    fn from(cause: &ImplementationError) -> Self {
        Self::from_implementation(cause)
    }
}

impl From<String> for DatabaseError {
    fn from(message: String) -> Self {
        Self::unclassified(message)
    }
}

impl From<&str> for DatabaseError {
    fn from(message: &str) -> Self {
        Self::unclassified(message)
    }
}

/// Translation helpers for engine results at the API boundary.
pub trait ImplResultExt<T> {
    /// Translates the error, keeping the engine's message.
    fn into_api(self) -> ApiResult<T>;

    /// Translates the error under `message`, annotated with the engine's message.
    fn or_report(self, message: &str) -> ApiResult<T>;
}

impl<T> ImplResultExt<T> for Result<T, ImplementationError> {
    fn into_api(self) -> ApiResult<T> {
        self.map_err(|e| DatabaseError::from_implementation(&e))
    }

    fn or_report(self, message: &str) -> ApiResult<T> {
        self.map_err(|e| DatabaseError::with_override(message, &e))
    }
}
