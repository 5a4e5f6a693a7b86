//! Export module for Little Ledger
//!
//! Exports a single account in several formats:
//! - CSV: transaction history (spreadsheet-compatible)
//! - JSON: machine-readable account snapshot with export metadata
//! - YAML: human-readable account snapshot with export metadata

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Account;

pub use self::csv::export_history_csv;
pub use self::json::{
    export_account_json, import_from_json, AccountExport, EXPORT_SCHEMA_VERSION,
};
pub use self::yaml::{export_account_yaml, import_from_yaml};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transaction history only)
    Csv,
    /// JSON format (full account snapshot)
    Json,
    /// YAML format (full account snapshot, human-readable)
    Yaml,
}

impl FromStr for ExportFormat {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(LedgerError::Validation(format!(
                "Unknown export format: '{}'. Valid formats: csv, json, yaml",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Export `account` (named `name`) in the requested format
pub fn export_account<W: Write>(
    format: ExportFormat,
    name: &str,
    account: &Account,
    writer: &mut W,
) -> LedgerResult<()> {
    match format {
        ExportFormat::Csv => export_history_csv(account, writer),
        ExportFormat::Json => export_account_json(name, account, writer),
        ExportFormat::Yaml => export_account_yaml(name, account, writer),
    }
}

/// Parse an exported account snapshot
///
/// Only JSON and YAML exports carry the full account; CSV holds history
/// rows without the opening balance and cannot be read back.
pub fn import_account(format: ExportFormat, contents: &str) -> LedgerResult<AccountExport> {
    match format {
        ExportFormat::Json => import_from_json(contents),
        ExportFormat::Yaml => import_from_yaml(contents),
        ExportFormat::Csv => Err(LedgerError::Validation(
            "CSV exports cannot be imported; use a json or yaml export".into(),
        )),
    }
}
