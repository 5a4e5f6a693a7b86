//! CSV export of transaction history

use std::io::Write;

use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, Money};

/// One CSV row; amounts are plain decimals without a currency symbol
#[derive(Debug, Serialize)]
struct HistoryRow {
    timestamp: i64,
    date: String,
    income: String,
    expense: String,
    balance: String,
}

fn decimal(amount: Money) -> String {
    amount.format_with_symbol("")
}

/// Write the account's transaction history as CSV, oldest first
pub fn export_history_csv<W: Write>(account: &Account, writer: &mut W) -> LedgerResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    if account.history().is_empty() {
        // serialize() only emits headers alongside the first record
        csv_writer
            .write_record(["timestamp", "date", "income", "expense", "balance"])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    for txn in account.history() {
        let row = HistoryRow {
            timestamp: txn.timestamp(),
            date: txn
                .datetime()
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            income: decimal(txn.income()),
            expense: decimal(txn.expense()),
            balance: decimal(txn.balance()),
        };
        csv_writer
            .serialize(row)
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
