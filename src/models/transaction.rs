//! Transaction model
//!
//! A transaction is one balance-affecting event on an account. Once created
//! it is never modified; the owning account only appends new ones.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Which side of the ledger a transaction affects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// An immutable record of one deposit or withdrawal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Seconds since the Unix epoch (UTC)
    timestamp: i64,

    /// Amount added to the balance (never negative)
    income: Money,

    /// Amount removed from the balance (never negative)
    expense: Money,

    /// Account balance immediately after this transaction
    balance: Money,
}

impl Transaction {
    /// Create a transaction record
    ///
    /// Only the account aggregate builds transactions, so the resulting
    /// balance is trusted here; only the amounts are validated.
    pub(crate) fn new(
        timestamp: i64,
        income: Money,
        expense: Money,
        balance: Money,
    ) -> LedgerResult<Self> {
        if income.is_negative() {
            return Err(LedgerError::InvalidAmount(income));
        }
        if expense.is_negative() {
            return Err(LedgerError::InvalidAmount(expense));
        }

        Ok(Self {
            timestamp,
            income,
            expense,
            balance,
        })
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn income(&self) -> Money {
        self.income
    }

    pub fn expense(&self) -> Money {
        self.expense
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Net effect on the balance (income minus expense)
    pub fn net(&self) -> Money {
        self.income - self.expense
    }

    pub fn kind(&self) -> TransactionKind {
        if self.expense.is_positive() {
            TransactionKind::Withdrawal
        } else {
            TransactionKind::Deposit
        }
    }

    /// Timestamp as a UTC datetime, if it is representable
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.timestamp, 0).single()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = match self.kind() {
            TransactionKind::Deposit => self.income,
            TransactionKind::Withdrawal => self.expense,
        };
        write!(f, "{} {} -> {}", self.kind(), amount, self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_deposit() {
        let txn = Transaction::new(
            1_700_000_000,
            Money::from_cents(10000),
            Money::zero(),
            Money::from_cents(10000),
        )
        .unwrap();

        assert_eq!(txn.kind(), TransactionKind::Deposit);
        assert_eq!(txn.net().cents(), 10000);
        assert_eq!(txn.to_string(), "Deposit $100.00 -> $100.00");
    }

    #[test]
    fn test_new_withdrawal() {
        let txn = Transaction::new(
            1_700_000_000,
            Money::zero(),
            Money::from_cents(3000),
            Money::from_cents(7000),
        )
        .unwrap();

        assert_eq!(txn.kind(), TransactionKind::Withdrawal);
        assert_eq!(txn.net().cents(), -3000);
    }

    #[test]
    fn test_rejects_negative_amounts() {
        let err = Transaction::new(0, Money::from_cents(-1), Money::zero(), Money::zero())
            .unwrap_err();
        assert!(err.is_invalid_amount());

        let err = Transaction::new(0, Money::zero(), Money::from_cents(-1), Money::zero())
            .unwrap_err();
        assert!(err.is_invalid_amount());
    }

    #[test]
    fn test_datetime() {
        let txn = Transaction::new(86_400, Money::zero(), Money::zero(), Money::zero()).unwrap();
        let dt = txn.datetime().unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "1970-01-02");
    }

    #[test]
    fn test_serialized_field_names() {
        let txn = Transaction::new(
            42,
            Money::from_cents(500),
            Money::zero(),
            Money::from_cents(500),
        )
        .unwrap();

        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"timestamp": 42, "income": 500, "expense": 0, "balance": 500})
        );
    }
}
