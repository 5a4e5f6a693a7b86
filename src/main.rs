use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use little_ledger::cli::{
    handle_account_command, handle_audit_command, handle_balance, handle_deposit,
    handle_export_command, handle_history, handle_import_command, handle_withdraw,
    AccountCommands,
};
use little_ledger::config::{paths::DIR_ENV_VAR, LedgerPaths, Workspace};
use little_ledger::export::ExportFormat;
use little_ledger::logging;
use little_ledger::models::SystemClock;
use little_ledger::services::LedgerService;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Minimal personal finance ledger",
    long_about = "Little Ledger tracks a balance per named account and records every \
                  deposit and withdrawal as an immutable transaction, stored as JSON \
                  in a workspace directory."
)]
struct Cli {
    /// Workspace directory (overrides the default data directory)
    #[arg(long, global = true, env = DIR_ENV_VAR)]
    dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the workspace directory
    Init,

    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Deposit money into an account
    Deposit {
        /// Amount (e.g., "100.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Account name (defaults to the active account)
        #[arg(short, long)]
        account: Option<String>,
    },

    /// Withdraw money from an account
    Withdraw {
        /// Amount (e.g., "30.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Account name (defaults to the active account)
        #[arg(short, long)]
        account: Option<String>,
    },

    /// Show an account's balance
    Balance {
        /// Account name (defaults to the active account)
        #[arg(short, long)]
        account: Option<String>,
    },

    /// Show an account's transaction history
    History {
        /// Account name (defaults to the active account)
        #[arg(short, long)]
        account: Option<String>,
        /// Only show the most recent N transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Export an account
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Account name (defaults to the active account)
        #[arg(short, long)]
        account: Option<String>,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Restore an account from a json or yaml export
    Import {
        /// Export file to read
        file: PathBuf,
        /// Name for the restored account (defaults to the exported name)
        #[arg(short, long)]
        name: Option<String>,
        /// Export format (defaults to the file extension)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,

    /// Start an interactive shell
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let paths = match cli.dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let mut workspace = Workspace::open(paths)?;

    let Some(command) = cli.command else {
        println!("Little Ledger - minimal personal finance ledger");
        println!();
        println!("Run 'ledger --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Init => {
            workspace.init()?;
            println!(
                "Initialized ledger workspace at: {}",
                workspace.paths().base_dir().display()
            );
            println!();
            println!("Create an account with 'ledger account create <name>'.");
        }
        Commands::Config => {
            println!("Little Ledger Configuration");
            println!("===========================");
            println!("Workspace:      {}", workspace.paths().base_dir().display());
            println!("Accounts:       {}", workspace.paths().accounts_dir().display());
            println!("Audit log:      {}", workspace.paths().audit_log().display());
            println!(
                "Active account: {}",
                workspace.active_account().unwrap_or("(none)")
            );
        }
        Commands::Shell => {
            println!("Interactive shell is not implemented. Run 'ledger --help' for commands.");
        }
        Commands::Account(cmd) => {
            let mut service = LedgerService::new(&mut workspace, SystemClock);
            handle_account_command(&mut service, cmd)?;
        }
        Commands::Deposit { amount, account } => {
            let service = LedgerService::new(&mut workspace, SystemClock);
            handle_deposit(&service, account.as_deref(), &amount)?;
        }
        Commands::Withdraw { amount, account } => {
            let service = LedgerService::new(&mut workspace, SystemClock);
            handle_withdraw(&service, account.as_deref(), &amount)?;
        }
        Commands::Balance { account } => {
            let service = LedgerService::new(&mut workspace, SystemClock);
            handle_balance(&service, account.as_deref())?;
        }
        Commands::History { account, limit } => {
            let service = LedgerService::new(&mut workspace, SystemClock);
            handle_history(&service, account.as_deref(), limit)?;
        }
        Commands::Export {
            format,
            account,
            output,
        } => {
            let service = LedgerService::new(&mut workspace, SystemClock);
            handle_export_command(&service, account.as_deref(), format, output.as_deref())?;
        }
        Commands::Import { file, name, format } => {
            let mut service = LedgerService::new(&mut workspace, SystemClock);
            handle_import_command(&mut service, &file, name.as_deref(), format)?;
        }
        Commands::Audit { limit } => {
            let service = LedgerService::new(&mut workspace, SystemClock);
            handle_audit_command(&service, limit)?;
        }
    }

    Ok(())
}
