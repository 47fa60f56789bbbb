//! IDB Impl — error surface of the IndexedDB implementation layer.
//!
//! The storage engine (object stores, transactions, cursors) reports every
//! failure as an [`ImplementationError`]: a raw integer code plus a message.
//! The code space aliases the API error codes one-to-one; see [`codes`].
//!
//! Errors from this crate are **not** safe to hand to a script environment.
//! The `idb-api` crate translates them at the API boundary.

pub mod codes;
pub mod error;

pub use error::{ImplResult, ImplementationError};
