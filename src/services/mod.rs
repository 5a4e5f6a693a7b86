//! Service layer for Little Ledger
//!
//! The service layer applies account operations on top of the workspace and
//! storage layers, handling name resolution, persistence and auditing.

pub mod ledger;

pub use ledger::{AccountSummary, LedgerService};
