//! YAML export functionality
//!
//! Exports an account snapshot in a human-readable form and reads it back
//! for `ledger import`.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::AccountExport;
use crate::models::Account;

/// Export an account to YAML with a comment header
pub fn export_account_yaml<W: Write>(
    name: &str,
    account: &Account,
    writer: &mut W,
) -> LedgerResult<()> {
    let export = AccountExport::new(name, account);

    writeln!(writer, "# Little Ledger account export: {}", export.name)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer, "# Amounts are integer cents.")
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export, validating the embedded account
pub fn import_from_yaml(yaml_str: &str) -> LedgerResult<AccountExport> {
    let export: AccountExport =
        serde_yaml::from_str(yaml_str).map_err(|e| LedgerError::Parse(e.to_string()))?;
    export.validate()?;
    Ok(export)
}
