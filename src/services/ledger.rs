//! Ledger service
//!
//! Ties the account model to the workspace: resolves account names to files,
//! loads, applies, saves, and records each change in the audit log. Every
//! command runs to completion against the file; no state is kept between
//! invocations.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::config::Workspace;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, Clock, Money, Transaction};
use crate::storage;

/// Summary of an account with computed fields
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub name: String,
    pub balance: Money,
    pub start_balance: Money,
    /// Cumulative deposits; `None` when the sum exceeds the `Money` range
    pub total_income: Option<Money>,
    /// Cumulative withdrawals; `None` when the sum exceeds the `Money` range
    pub total_expense: Option<Money>,
    pub transaction_count: usize,
    /// Time of the most recent transaction
    pub last_activity: Option<DateTime<Utc>>,
    /// Whether this is the workspace's active account
    pub active: bool,
}

impl AccountSummary {
    fn new(name: &str, account: &Account, active: bool) -> Self {
        Self {
            name: name.to_string(),
            balance: account.balance(),
            start_balance: account.start_balance(),
            total_income: account.total_income(),
            total_expense: account.total_expense(),
            transaction_count: account.history().len(),
            last_activity: account.last_transaction().and_then(Transaction::datetime),
            active,
        }
    }
}

/// Balance-affecting operations
#[derive(Debug, Clone, Copy)]
enum Movement {
    Deposit,
    Withdraw,
}

impl Movement {
    fn operation(self) -> Operation {
        match self {
            Movement::Deposit => Operation::Deposit,
            Movement::Withdraw => Operation::Withdraw,
        }
    }
}

/// Service for ledger operations on named accounts
pub struct LedgerService<'a, C: Clock> {
    workspace: &'a mut Workspace,
    clock: C,
    audit: AuditLogger,
}

impl<'a, C: Clock> LedgerService<'a, C> {
    pub fn new(workspace: &'a mut Workspace, clock: C) -> Self {
        let audit = AuditLogger::new(workspace.paths().audit_log());
        Self {
            workspace,
            clock,
            audit,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &*self.workspace
    }

    pub fn audit_log(&self) -> &AuditLogger {
        &self.audit
    }

    /// Create and persist a new account
    ///
    /// The first account created in a workspace becomes the active one.
    pub fn create_account(&mut self, name: &str, start_balance: Money) -> LedgerResult<Account> {
        let path = self.workspace.account_path(name)?;
        if path.exists() {
            return Err(LedgerError::account_exists(name));
        }

        self.workspace.paths().ensure_directories()?;

        let account = Account::create(start_balance);
        storage::save(&account, &path)?;
        self.audit
            .log(&AuditEntry::create(self.clock.now(), name, start_balance))?;

        if self.workspace.active_account().is_none() {
            self.workspace.set_active(name)?;
        }

        info!(account = name, start_balance = start_balance.cents(), "created account");
        Ok(account)
    }

    /// Store an existing account snapshot under a new name
    ///
    /// The snapshot must pass `Account::verify`. Like `create_account`, the
    /// first account in a workspace becomes the active one.
    pub fn import_account(&mut self, name: &str, account: &Account) -> LedgerResult<()> {
        let path = self.workspace.account_path(name)?;
        if path.exists() {
            return Err(LedgerError::account_exists(name));
        }
        account.verify()?;

        self.workspace.paths().ensure_directories()?;
        storage::save(account, &path)?;
        self.audit
            .log(&AuditEntry::import(self.clock.now(), name, account.balance()))?;

        if self.workspace.active_account().is_none() {
            self.workspace.set_active(name)?;
        }

        info!(
            account = name,
            transactions = account.history().len(),
            "imported account"
        );
        Ok(())
    }

    /// Make the named account the one commands target by default
    pub fn set_active(&mut self, name: &str) -> LedgerResult<()> {
        self.workspace.set_active(name)?;
        info!(account = name, "switched active account");
        Ok(())
    }

    /// Load the named account
    pub fn open(&self, name: &str) -> LedgerResult<Account> {
        let path = self.workspace.account_path(name)?;
        if !path.exists() {
            return Err(LedgerError::account_not_found(name));
        }
        storage::load(&path)
    }

    /// Deposit into the named account and return the new balance
    pub fn deposit(&self, name: &str, amount: Money) -> LedgerResult<Money> {
        self.record(name, Movement::Deposit, amount)
    }

    /// Withdraw from the named account and return the new balance
    pub fn withdraw(&self, name: &str, amount: Money) -> LedgerResult<Money> {
        self.record(name, Movement::Withdraw, amount)
    }

    fn record(&self, name: &str, movement: Movement, amount: Money) -> LedgerResult<Money> {
        let path = self.workspace.account_path(name)?;
        let mut account = self.open(name)?;

        let balance = match movement {
            Movement::Deposit => account.deposit(amount, &self.clock)?,
            Movement::Withdraw => account.withdraw(amount, &self.clock)?,
        };
        let operation = movement.operation();

        storage::save(&account, &path)?;
        self.audit.log(&AuditEntry::movement(
            self.clock.now(),
            operation,
            name,
            amount,
            balance,
        ))?;

        info!(
            account = name,
            operation = %operation,
            amount = amount.cents(),
            balance = balance.cents(),
            "recorded transaction"
        );
        Ok(balance)
    }

    /// Transaction history of the named account, oldest first
    pub fn history(&self, name: &str) -> LedgerResult<Vec<Transaction>> {
        Ok(self.open(name)?.history().to_vec())
    }

    /// Summary of the named account
    pub fn summary(&self, name: &str) -> LedgerResult<AccountSummary> {
        let account = self.open(name)?;
        let active = self.workspace.active_account() == Some(name);
        Ok(AccountSummary::new(name, &account, active))
    }

    /// Summaries of every account in the workspace, sorted by name
    pub fn list(&self) -> LedgerResult<Vec<AccountSummary>> {
        self.workspace
            .account_names()?
            .iter()
            .map(|name| self.summary(name))
            .collect()
    }

    /// Delete the named account's file
    ///
    /// Clears the active pointer if it named this account.
    pub fn delete_account(&mut self, name: &str) -> LedgerResult<()> {
        if !self.workspace.account_exists(name)? {
            return Err(LedgerError::account_not_found(name));
        }

        // A corrupt file can still be deleted; the audit entry just lacks a balance
        let final_balance = self.open(name).ok().map(|account| account.balance());

        self.workspace.remove_account_file(name)?;
        if self.workspace.active_account() == Some(name) {
            self.workspace.clear_active()?;
        }

        self.audit
            .log(&AuditEntry::delete(self.clock.now(), name, final_balance))?;

        info!(account = name, "deleted account");
        Ok(())
    }
}
