//! Display formatting for terminal output
//!
//! Provides utilities for formatting accounts and transaction history as
//! plain-text tables.

pub mod account;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use transaction::format_history;
