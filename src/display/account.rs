//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::Money;
use crate::services::AccountSummary;

const AMOUNT_WIDTH: usize = 14;

/// Shown in place of a sum that does not fit in `Money`
const OVERFLOW: &str = "(overflow)";

/// Format a list of accounts with balances as a table
pub fn format_account_list(summaries: &[AccountSummary]) -> String {
    if summaries.is_empty() {
        return "No accounts found.".to_string();
    }

    let name_width = summaries
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<name_width$}  {:>w$}  {:>6}\n",
        "Name",
        "Balance",
        "Txns",
        name_width = name_width,
        w = AMOUNT_WIDTH,
    ));
    output.push_str(&separator(name_width));

    for summary in summaries {
        let marker = if summary.active { "*" } else { " " };
        output.push_str(&format!(
            "{} {:<name_width$}  {}  {:>6}\n",
            marker,
            summary.name,
            summary.balance.format_padded(AMOUNT_WIDTH),
            summary.transaction_count,
            name_width = name_width,
        ));
    }

    let total = Money::checked_sum(summaries.iter().map(|s| s.balance));
    output.push_str(&separator(name_width));
    output.push_str(&format!(
        "  {:<name_width$}  {}\n",
        "TOTAL",
        padded_or_overflow(total, AMOUNT_WIDTH),
        name_width = name_width,
    ));

    output
}

fn padded_or_overflow(amount: Option<Money>, width: usize) -> String {
    match amount {
        Some(amount) => amount.format_padded(width),
        None => format!("{:>width$}", OVERFLOW, width = width),
    }
}

fn separator(name_width: usize) -> String {
    format!(
        "  {:-<name_width$}  {:->w$}  {:->6}\n",
        "",
        "",
        "",
        name_width = name_width,
        w = AMOUNT_WIDTH,
    )
}

/// Format a single account's details
pub fn format_account_details(summary: &AccountSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", summary.name));
    output.push_str(&format!(
        "  Active:           {}\n",
        if summary.active { "Yes" } else { "No" }
    ));
    output.push_str(&format!("  Balance:          {}\n", summary.balance));
    output.push_str(&format!("  Starting Balance: {}\n", summary.start_balance));
    output.push_str(&format!(
        "  Total Income:     {}\n",
        padded_or_overflow(summary.total_income, 0)
    ));
    output.push_str(&format!(
        "  Total Expense:    {}\n",
        padded_or_overflow(summary.total_expense, 0)
    ));
    output.push_str(&format!(
        "  Transactions:     {}\n",
        summary.transaction_count
    ));

    match summary.last_activity {
        Some(at) => output.push_str(&format!(
            "  Last Activity:    {}\n",
            at.format("%Y-%m-%d %H:%M:%S UTC")
        )),
        None => output.push_str("  Last Activity:    never\n"),
    }

    output
}
