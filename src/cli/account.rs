//! Account CLI commands
//!
//! Implements CLI commands for account management.

use clap::Subcommand;

use crate::display::{format_account_details, format_account_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Clock, Money};
use crate::services::LedgerService;

/// Account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        /// Account name (letters, digits, '-', '_' or '.')
        name: String,
        /// Starting balance (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
    },
    /// List all accounts
    List,
    /// Show account details
    Show {
        /// Account name (defaults to the active account)
        account: Option<String>,
    },
    /// Make an account the active one
    Use {
        /// Account name
        account: String,
    },
    /// Delete an account and its history
    Delete {
        /// Account name
        account: String,
    },
}

/// Parse a user-entered amount
pub(crate) fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount '{}'. Use a format like '12.34' or '12'. Error: {}",
            input, e
        ))
    })
}

/// Handle an account command
pub fn handle_account_command<C: Clock>(
    service: &mut LedgerService<'_, C>,
    cmd: AccountCommands,
) -> LedgerResult<()> {
    match cmd {
        AccountCommands::Create { name, balance } => {
            let start_balance = parse_amount(&balance)?;
            let account = service.create_account(&name, start_balance)?;

            println!("Created account: {}", name);
            println!("  Starting Balance: {}", account.start_balance());
            if service.workspace().active_account() == Some(name.as_str()) {
                println!("  Active: Yes");
            }
        }

        AccountCommands::List => {
            let summaries = service.list()?;
            print!("{}", format_account_list(&summaries));
            if summaries.is_empty() {
                println!();
            }
        }

        AccountCommands::Show { account } => {
            let name = service
                .workspace()
                .resolve_account(account.as_deref())?
                .to_string();
            let summary = service.summary(&name)?;
            print!("{}", format_account_details(&summary));
        }

        AccountCommands::Use { account } => {
            service.set_active(&account)?;
            println!("Active account: {}", account);
        }

        AccountCommands::Delete { account } => {
            service.delete_account(&account)?;
            println!("Deleted account: {}", account);
        }
    }

    Ok(())
}
