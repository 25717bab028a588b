//! Domain types shared across the Opshub workspace.
//!
//! Contains the error enum, id/timestamp aliases, storage backend
//! configuration unions, slug derivation, and the environment-variable
//! grouping transform. No I/O happens here.

pub mod error;
pub mod slug;
pub mod storage;
pub mod types;
pub mod variables;
