//! Transaction history formatting

use crate::models::{Money, Transaction};

const AMOUNT_WIDTH: usize = 12;

/// Format transaction history as a table, oldest first
///
/// With a limit only the most recent `limit` transactions are shown.
pub fn format_history(transactions: &[Transaction], limit: Option<usize>) -> String {
    if transactions.is_empty() {
        return "No transactions yet.".to_string();
    }

    let start = limit.map_or(0, |n| transactions.len().saturating_sub(n));
    let shown = &transactions[start..];

    let mut output = String::new();
    output.push_str(&format!(
        "{:<19}  {:>w$}  {:>w$}  {:>w$}\n",
        "Date",
        "Income",
        "Expense",
        "Balance",
        w = AMOUNT_WIDTH,
    ));
    output.push_str(&format!(
        "{:-<19}  {:->w$}  {:->w$}  {:->w$}\n",
        "",
        "",
        "",
        "",
        w = AMOUNT_WIDTH,
    ));

    for txn in shown {
        let date = txn
            .datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| txn.timestamp().to_string());

        output.push_str(&format!(
            "{:<19}  {}  {}  {}\n",
            date,
            blank_if_zero(txn.income()),
            blank_if_zero(txn.expense()),
            txn.balance().format_padded(AMOUNT_WIDTH),
        ));
    }

    if start > 0 {
        output.push_str(&format!(
            "({} earlier transactions not shown)\n",
            start
        ));
    }

    output
}

fn blank_if_zero(amount: Money) -> String {
    if amount.is_zero() {
        " ".repeat(AMOUNT_WIDTH)
    } else {
        amount.format_padded(AMOUNT_WIDTH)
    }
}
