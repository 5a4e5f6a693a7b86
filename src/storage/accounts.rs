//! Account file persistence
//!
//! Each account lives in its own JSON file holding the full snapshot:
//!
//! ```json
//! {
//!   "balance": 7000,
//!   "startBalance": 0,
//!   "transactions": [
//!     { "timestamp": 1700000000, "income": 10000, "expense": 0, "balance": 10000 },
//!     { "timestamp": 1700000030, "income": 0, "expense": 3000, "balance": 7000 }
//!   ]
//! }
//! ```
//!
//! Amounts are integer cents and timestamps are Unix seconds.

use std::path::Path;

use tracing::debug;

use crate::error::LedgerResult;
use crate::models::Account;

use super::file_io::{read_json_required, write_json_atomic};

/// Write the full account snapshot to `path`, replacing any previous content
///
/// The previous file survives intact if the write fails.
pub fn save<P: AsRef<Path>>(account: &Account, path: P) -> LedgerResult<()> {
    let path = path.as_ref();
    write_json_atomic(path, account)?;
    debug!(
        path = %path.display(),
        transactions = account.history().len(),
        "saved account"
    );
    Ok(())
}

/// Read an account snapshot from `path`
///
/// A missing or unreadable file is an I/O error. Malformed JSON, or a
/// history whose balances do not chain, is a parse error.
pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Account> {
    let path = path.as_ref();
    let account: Account = read_json_required(path)?;
    account.verify()?;
    debug!(
        path = %path.display(),
        transactions = account.history().len(),
        "loaded account"
    );
    Ok(account)
}
