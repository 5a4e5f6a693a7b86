//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Types of operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Account was created
    Create,
    /// Money was deposited
    Deposit,
    /// Money was withdrawn
    Withdraw,
    /// Account file was deleted
    Delete,
    /// Account was restored from an export
    Import,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Deposit => write!(f, "DEPOSIT"),
            Operation::Withdraw => write!(f, "WITHDRAW"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Import => write!(f, "IMPORT"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Name of the affected account
    pub account: String,

    /// Amount moved by the operation (or opening balance for creates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    /// Account balance after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Money>,
}

impl AuditEntry {
    /// Entry for a newly created account
    pub fn create(timestamp: DateTime<Utc>, account: impl Into<String>, start_balance: Money) -> Self {
        Self {
            timestamp,
            operation: Operation::Create,
            account: account.into(),
            amount: Some(start_balance),
            balance: Some(start_balance),
        }
    }

    /// Entry for a deposit or withdrawal
    pub fn movement(
        timestamp: DateTime<Utc>,
        operation: Operation,
        account: impl Into<String>,
        amount: Money,
        balance: Money,
    ) -> Self {
        Self {
            timestamp,
            operation,
            account: account.into(),
            amount: Some(amount),
            balance: Some(balance),
        }
    }

    /// Entry for an account restored from an export
    pub fn import(timestamp: DateTime<Utc>, account: impl Into<String>, balance: Money) -> Self {
        Self {
            timestamp,
            operation: Operation::Import,
            account: account.into(),
            amount: None,
            balance: Some(balance),
        }
    }

    /// Entry for a deleted account, recording its final balance
    pub fn delete(timestamp: DateTime<Utc>, account: impl Into<String>, balance: Option<Money>) -> Self {
        Self {
            timestamp,
            operation: Operation::Delete,
            account: account.into(),
            amount: None,
            balance,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.account
        );

        if let Some(amount) = self.amount {
            output.push_str(&format!(" {}", amount));
        }

        if let Some(balance) = self.balance {
            output.push_str(&format!(" (balance {})", balance));
        }

        output
    }
}
