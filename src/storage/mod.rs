//! Storage layer for Little Ledger
//!
//! Provides JSON file storage with atomic writes. Each account is persisted
//! as a standalone snapshot file; the workspace decides where those files
//! live.

pub mod accounts;
pub mod file_io;

pub use accounts::{load, save};
pub use file_io::{read_json, read_json_required, write_json_atomic};
