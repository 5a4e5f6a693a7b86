//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod export;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use export::{handle_export_command, handle_import_command};
pub use transaction::{handle_balance, handle_deposit, handle_history, handle_withdraw};

use crate::error::LedgerResult;
use crate::models::Clock;
use crate::services::LedgerService;

/// Print the most recent audit log entries
pub fn handle_audit_command<C: Clock>(
    service: &LedgerService<'_, C>,
    limit: usize,
) -> LedgerResult<()> {
    let entries = service.audit_log().read_recent(limit)?;
    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
