//! IDB API — boundary-safe errors for the IndexedDB API layer.
//!
//! Failures raised by the implementation layer ([`idb_impl::ImplementationError`])
//! are translated here into a [`DatabaseError`]: one of eleven stable
//! [`ErrorCode`]s plus a message that is safe to show a script environment.
//!
//! - [`code`]  — the closed code set, retry classes, parsing
//! - [`error`] — `DatabaseError` construction and `?`-friendly helpers
//! - [`host`]  — the read-only property table a host bridge reads
//! - [`body`]  — JSON representation of the host surface
//!
//! Nothing in this crate performs I/O; every type is an immutable value.

pub mod body;
pub mod code;
pub mod error;
pub mod host;

pub use body::ErrorBody;
pub use code::{ErrorCode, RetryClass};
pub use error::{ApiResult, DatabaseError, ImplResultExt};
pub use host::{HostMessage, HostValue, HostView};
