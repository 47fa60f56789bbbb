//! IDB Errors - diagnostic CLI for the IndexedDB API error boundary.
//!
//! The translation logic lives in `idb-api`; this crate adds:
//! - `config`   — clap-based CLI/env configuration
//! - `commands` — `codes`, `explain` and `translate` subcommands
//! - `error`    — CLI error type and exit codes

pub mod commands;
pub mod config;
pub mod error;

pub use config::Config;
