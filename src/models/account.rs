//! Account model
//!
//! An account owns its current balance, the balance it was opened with, and
//! the ordered history of every transaction applied to it. Balance changes
//! only happen through `deposit` and `withdraw`, each of which appends
//! exactly one transaction.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::clock::Clock;
use super::money::Money;
use super::transaction::Transaction;
use crate::error::{LedgerError, LedgerResult};

/// A ledger account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Current balance
    balance: Money,

    /// Balance the account was opened with; never changes afterwards
    #[serde(rename = "startBalance")]
    start_balance: Money,

    /// Append-only history in chronological order
    transactions: Vec<Transaction>,
}

impl Account {
    /// Create a new account with the given opening balance
    pub fn create(start_balance: Money) -> Self {
        Self {
            balance: start_balance,
            start_balance,
            transactions: Vec::new(),
        }
    }

    /// Add money to the account and return the new balance
    ///
    /// Negative amounts are rejected with `InvalidAmount` and leave the
    /// account untouched.
    pub fn deposit(&mut self, amount: Money, clock: &dyn Clock) -> LedgerResult<Money> {
        self.apply(amount, Money::zero(), clock)
    }

    /// Remove money from the account and return the new balance
    ///
    /// The balance is allowed to go negative.
    pub fn withdraw(&mut self, amount: Money, clock: &dyn Clock) -> LedgerResult<Money> {
        self.apply(Money::zero(), amount, clock)
    }

    fn apply(&mut self, income: Money, expense: Money, clock: &dyn Clock) -> LedgerResult<Money> {
        if income.is_negative() {
            return Err(LedgerError::InvalidAmount(income));
        }
        if expense.is_negative() {
            return Err(LedgerError::InvalidAmount(expense));
        }

        let new_balance = self
            .balance
            .checked_add(income)
            .and_then(|b| b.checked_sub(expense))
            .ok_or(LedgerError::InvalidAmount(if income.is_zero() {
                expense
            } else {
                income
            }))?;

        let txn = Transaction::new(clock.timestamp(), income, expense, new_balance)?;
        self.transactions.push(txn);
        self.balance = new_balance;

        Ok(new_balance)
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn start_balance(&self) -> Money {
        self.start_balance
    }

    /// Read-only view of the transaction history, oldest first
    pub fn history(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    /// Sum of all deposits, or `None` if it exceeds the `Money` range
    ///
    /// The balance can stay in range while cumulative income does not, e.g.
    /// after depositing and withdrawing `i64::MAX` cents and depositing again.
    pub fn total_income(&self) -> Option<Money> {
        Money::checked_sum(self.transactions.iter().map(Transaction::income))
    }

    /// Sum of all withdrawals, or `None` if it exceeds the `Money` range
    pub fn total_expense(&self) -> Option<Money> {
        Money::checked_sum(self.transactions.iter().map(Transaction::expense))
    }

    /// Check that the history is internally consistent
    ///
    /// Every entry's balance must equal the previous balance (or the opening
    /// balance for the first entry) plus income minus expense, amounts must
    /// be non-negative, and the current balance must match the last entry.
    pub fn verify(&self) -> LedgerResult<()> {
        let mut running = self.start_balance;

        for (index, txn) in self.transactions.iter().enumerate() {
            if txn.income().is_negative() || txn.expense().is_negative() {
                return Err(LedgerError::Parse(format!(
                    "transaction {} has a negative amount",
                    index
                )));
            }

            let expected = running
                .checked_add(txn.income())
                .and_then(|b| b.checked_sub(txn.expense()))
                .ok_or_else(|| {
                    LedgerError::Parse(format!("transaction {} overflows the balance", index))
                })?;

            if txn.balance() != expected {
                return Err(LedgerError::Parse(format!(
                    "transaction {} records balance {} but history implies {}",
                    index,
                    txn.balance(),
                    expected
                )));
            }

            running = expected;
        }

        if self.balance != running {
            return Err(LedgerError::Parse(format!(
                "account balance {} does not match history total {}",
                self.balance, running
            )));
        }

        Ok(())
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::create(Money::zero())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} transactions)",
            self.balance,
            self.transactions.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clock::FixedClock;
    use crate::models::transaction::TransactionKind;
    use chrono::Duration;
    use proptest::prelude::*;

    fn clock() -> FixedClock {
        FixedClock::at_timestamp(1_700_000_000)
    }

    #[test]
    fn test_create() {
        let account = Account::create(Money::from_cents(2500));
        assert_eq!(account.balance(), Money::from_cents(2500));
        assert_eq!(account.start_balance(), Money::from_cents(2500));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_deposit_then_withdraw() {
        let clock = clock();
        let mut account = Account::create(Money::zero());

        let balance = account
            .deposit(Money::from_decimal(100.00), &clock)
            .unwrap();
        assert_eq!(balance, Money::from_cents(10000));
        assert_eq!(account.history().len(), 1);

        let first = &account.history()[0];
        assert_eq!(first.income(), Money::from_cents(10000));
        assert_eq!(first.expense(), Money::zero());
        assert_eq!(first.balance(), Money::from_cents(10000));

        clock.advance(Duration::seconds(30));
        let balance = account
            .withdraw(Money::from_decimal(30.00), &clock)
            .unwrap();
        assert_eq!(balance, Money::from_cents(7000));
        assert_eq!(account.balance(), Money::from_cents(7000));
        assert_eq!(account.history().len(), 2);

        let second = &account.history()[1];
        assert_eq!(second.income(), Money::zero());
        assert_eq!(second.expense(), Money::from_cents(3000));
        assert_eq!(second.balance(), Money::from_cents(7000));
        assert_eq!(second.kind(), TransactionKind::Withdrawal);
        assert_eq!(second.timestamp(), 1_700_000_030);
    }

    #[test]
    fn test_timestamps_come_from_clock() {
        let clock = FixedClock::at_timestamp(123);
        let mut account = Account::default();
        account.deposit(Money::from_cents(1), &clock).unwrap();
        assert_eq!(account.history()[0].timestamp(), 123);
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let clock = clock();
        let mut account = Account::create(Money::from_cents(1000));

        let err = account.deposit(Money::from_cents(-500), &clock).unwrap_err();
        assert!(err.is_invalid_amount());

        let err = account.withdraw(Money::from_cents(-500), &clock).unwrap_err();
        assert!(err.is_invalid_amount());

        assert_eq!(account.balance(), Money::from_cents(1000));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_overdraft_allowed() {
        let clock = clock();
        let mut account = Account::create(Money::zero());
        let balance = account.withdraw(Money::from_cents(500), &clock).unwrap();
        assert_eq!(balance, Money::from_cents(-500));
        assert!(account.verify().is_ok());
    }

    #[test]
    fn test_overflow_rejected_without_change() {
        let clock = clock();
        let mut account = Account::create(Money::from_cents(i64::MAX - 10));
        let err = account.deposit(Money::from_cents(100), &clock).unwrap_err();
        assert!(err.is_invalid_amount());
        assert_eq!(account.balance(), Money::from_cents(i64::MAX - 10));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_zero_amount_still_recorded() {
        let clock = clock();
        let mut account = Account::create(Money::zero());
        account.deposit(Money::zero(), &clock).unwrap();
        assert_eq!(account.history().len(), 1);
        assert_eq!(account.history()[0].kind(), TransactionKind::Deposit);
    }

    #[test]
    fn test_totals() {
        let clock = clock();
        let mut account = Account::create(Money::from_cents(100));
        account.deposit(Money::from_cents(500), &clock).unwrap();
        account.deposit(Money::from_cents(250), &clock).unwrap();
        account.withdraw(Money::from_cents(300), &clock).unwrap();

        assert_eq!(account.total_income(), Some(Money::from_cents(750)));
        assert_eq!(account.total_expense(), Some(Money::from_cents(300)));
        assert_eq!(
            account.last_transaction().map(Transaction::balance),
            Some(Money::from_cents(550))
        );
    }

    #[test]
    fn test_totals_out_of_range_on_valid_account() {
        let clock = clock();
        let max = Money::from_cents(i64::MAX);
        let mut account = Account::create(Money::zero());
        account.deposit(max, &clock).unwrap();
        account.withdraw(max, &clock).unwrap();
        account.deposit(max, &clock).unwrap();

        assert!(account.verify().is_ok());
        assert_eq!(account.balance(), max);
        assert_eq!(account.total_income(), None);
        assert_eq!(account.total_expense(), Some(max));
    }

    #[test]
    fn test_verify_detects_broken_chain() {
        let json = r#"{
            "balance": 900,
            "startBalance": 0,
            "transactions": [
                {"timestamp": 1, "income": 1000, "expense": 0, "balance": 1000},
                {"timestamp": 2, "income": 0, "expense": 100, "balance": 800}
            ]
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert!(account.verify().unwrap_err().is_parse());
    }

    #[test]
    fn test_verify_detects_balance_mismatch() {
        let json = r#"{"balance": 5, "startBalance": 0, "transactions": []}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert!(account.verify().unwrap_err().is_parse());
    }

    #[test]
    fn test_serialization_uses_persisted_names() {
        let clock = FixedClock::at_timestamp(10);
        let mut account = Account::create(Money::zero());
        account.deposit(Money::from_cents(10000), &clock).unwrap();

        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "balance": 10000,
                "startBalance": 0,
                "transactions": [
                    {"timestamp": 10, "income": 10000, "expense": 0, "balance": 10000}
                ]
            })
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Balance always equals the opening balance plus net activity, and
        /// every history entry chains from its predecessor.
        #[test]
        fn balance_matches_history(
            start in -1_000_000i64..1_000_000i64,
            ops in prop::collection::vec((any::<bool>(), 0i64..1_000_000i64), 0..40)
        ) {
            let clock = FixedClock::at_timestamp(1_700_000_000);
            let mut account = Account::create(Money::from_cents(start));
            let mut incomes = 0i64;
            let mut expenses = 0i64;

            for (is_deposit, cents) in &ops {
                let amount = Money::from_cents(*cents);
                let balance = if *is_deposit {
                    incomes += cents;
                    account.deposit(amount, &clock).unwrap()
                } else {
                    expenses += cents;
                    account.withdraw(amount, &clock).unwrap()
                };
                prop_assert_eq!(balance.cents(), start + incomes - expenses);
                prop_assert_eq!(account.balance(), balance);
                clock.advance(Duration::seconds(1));
            }

            prop_assert_eq!(account.history().len(), ops.len());

            let mut previous = account.start_balance();
            for txn in account.history() {
                prop_assert_eq!(txn.balance(), previous + txn.income() - txn.expense());
                previous = txn.balance();
            }

            prop_assert!(account.verify().is_ok());
        }

        /// Negative amounts never change the account.
        #[test]
        fn negative_amounts_never_mutate(cents in i64::MIN..0i64, deposit in any::<bool>()) {
            let clock = FixedClock::at_timestamp(0);
            let mut account = Account::create(Money::from_cents(100));
            let before = account.clone();

            let result = if deposit {
                account.deposit(Money::from_cents(cents), &clock)
            } else {
                account.withdraw(Money::from_cents(cents), &clock)
            };

            prop_assert!(result.unwrap_err().is_invalid_amount());
            prop_assert_eq!(account, before);
        }
    }
}
