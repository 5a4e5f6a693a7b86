//! Transaction CLI commands
//!
//! Deposit, withdraw, balance and history against a named or active account.

use crate::display::format_history;
use crate::error::LedgerResult;
use crate::models::Clock;
use crate::services::LedgerService;

use super::account::parse_amount;

/// Deposit `amount` into the account and print the new balance
pub fn handle_deposit<C: Clock>(
    service: &LedgerService<'_, C>,
    account: Option<&str>,
    amount: &str,
) -> LedgerResult<()> {
    let name = service.workspace().resolve_account(account)?;
    let amount = parse_amount(amount)?;
    let balance = service.deposit(name, amount)?;
    println!("Deposited {} into {}. Balance: {}", amount, name, balance);
    Ok(())
}

/// Withdraw `amount` from the account and print the new balance
pub fn handle_withdraw<C: Clock>(
    service: &LedgerService<'_, C>,
    account: Option<&str>,
    amount: &str,
) -> LedgerResult<()> {
    let name = service.workspace().resolve_account(account)?;
    let amount = parse_amount(amount)?;
    let balance = service.withdraw(name, amount)?;
    println!("Withdrew {} from {}. Balance: {}", amount, name, balance);
    if balance.is_negative() {
        println!("Warning: {} is overdrawn.", name);
    }
    Ok(())
}

/// Print the current and starting balance
pub fn handle_balance<C: Clock>(
    service: &LedgerService<'_, C>,
    account: Option<&str>,
) -> LedgerResult<()> {
    let name = service.workspace().resolve_account(account)?;
    let summary = service.summary(name)?;
    println!("Account: {}", summary.name);
    println!("Balance: {}", summary.balance);
    println!("Starting Balance: {}", summary.start_balance);
    Ok(())
}

/// Print the transaction history
pub fn handle_history<C: Clock>(
    service: &LedgerService<'_, C>,
    account: Option<&str>,
    limit: Option<usize>,
) -> LedgerResult<()> {
    let name = service.workspace().resolve_account(account)?;
    let history = service.history(name)?;
    println!("History for {}:", name);
    println!("{}", format_history(&history, limit).trim_end());
    Ok(())
}
