//! JSON error body.
//!
//! Mirrors the host surface: a code and a message, nothing else.

use serde::{Deserialize, Serialize};

use crate::code::ErrorCode;
use crate::error::DatabaseError;
use crate::host::{HostMessage, HostView};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Numeric API error code (e.g. 32 for `TIMEOUT_ERR`).
    pub code: i32,
    /// Human-readable, boundary-safe message.
    pub message: String,
}

impl From<HostView<'_>> for ErrorBody {
    fn from(view: HostView<'_>) -> Self {
        Self {
            code: view.code().value(),
            message: view.message().to_string(),
        }
    }
}

impl ErrorBody {
    pub fn from_error(error: &DatabaseError, policy: HostMessage) -> Self {
        error.host_view(policy).into()
    }

    /// Rebuilds an API error from a received body. Codes outside the closed
    /// set are reported as `UNKNOWN_ERR`.
    pub fn into_error(self) -> DatabaseError {
        DatabaseError::new(self.message, ErrorCode::from_value_or_unknown(self.code))
    }
}
