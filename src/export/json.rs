//! JSON export functionality
//!
//! Wraps the persisted account snapshot with export metadata.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Account;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported account structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Account name within its workspace
    pub name: String,

    /// The account snapshot, in the same shape as its account file
    pub account: Account,
}

impl AccountExport {
    pub fn new(name: impl Into<String>, account: &Account) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            name: name.into(),
            account: account.clone(),
        }
    }

    /// Check that the embedded account is internally consistent
    pub fn validate(&self) -> LedgerResult<()> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(LedgerError::Parse(format!(
                "Unsupported export schema version: {}",
                self.schema_version
            )));
        }
        self.account.verify()
    }
}

/// Export an account to pretty-printed JSON
pub fn export_account_json<W: Write>(
    name: &str,
    account: &Account,
    writer: &mut W,
) -> LedgerResult<()> {
    let export = AccountExport::new(name, account);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

/// Read back a JSON export, validating the embedded account
pub fn import_from_json(json_str: &str) -> LedgerResult<AccountExport> {
    let export: AccountExport = serde_json::from_str(json_str)?;
    export.validate()?;
    Ok(export)
}
