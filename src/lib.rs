//! Little Ledger - minimal personal finance ledger
//!
//! Tracks a single balance per named account, records every deposit and
//! withdrawal as an immutable transaction, and keeps each account in its own
//! JSON file between invocations.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, the clock abstraction, transactions and accounts
//! - `storage`: Atomic JSON persistence of account snapshots
//! - `config`: Workspace paths and the active-account pointer
//! - `services`: Name-based ledger operations over a workspace
//! - `audit`: Append-only audit log
//! - `display`: Plain-text tables for terminal output
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers used by the `ledger` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```
//! use little_ledger::models::{Account, FixedClock, Money};
//!
//! let clock = FixedClock::at_timestamp(1_700_000_000);
//! let mut account = Account::create(Money::zero());
//! account.deposit(Money::from_decimal(100.00), &clock)?;
//! account.withdraw(Money::from_decimal(30.00), &clock)?;
//! assert_eq!(account.balance(), Money::from_cents(7000));
//! assert_eq!(account.history().len(), 2);
//! # Ok::<(), little_ledger::LedgerError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
