//! Core data models for Little Ledger
//!
//! This module contains the ledger domain: money amounts, the clock used to
//! timestamp activity, immutable transactions, and the account aggregate
//! that owns them.

pub mod account;
pub mod clock;
pub mod money;
pub mod transaction;

pub use account::Account;
pub use clock::{Clock, FixedClock, SystemClock};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind};
