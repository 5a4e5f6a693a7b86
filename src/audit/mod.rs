//! Audit logging for Little Ledger
//!
//! Records account creation, every deposit and withdrawal, and account
//! deletion in an append-only log next to the account files.
//!
//! - `AuditEntry`: one operation with its timestamp, account, amount and
//!   resulting balance.
//! - `AuditLogger`: writes entries as line-delimited JSON (JSONL) and reads
//!   them back in chronological order.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
