use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use teller::cli::{
    handle_account_command, handle_config_command, handle_deposit, handle_login, handle_withdraw,
    ConfigArgs,
};
use teller::config::{Settings, TellerPaths};
use teller::storage::AccountManager;

#[derive(Parser)]
#[command(
    name = "teller",
    version,
    about = "PIN-gated account ledger",
    long_about = "teller keeps a small set of bank accounts in a CSV file. \
                  Accounts are created with a name, an opening balance and a \
                  four-digit PIN; deposits and withdrawals require the PIN."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(teller::cli::AccountCommands),

    /// Deposit money into an account
    Deposit {
        /// Account name
        account: String,
        /// Amount (e.g., "25.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Account PIN (prompted if omitted)
        #[arg(short, long)]
        pin: Option<String>,
    },

    /// Withdraw money from an account
    Withdraw {
        /// Account name
        account: String,
        /// Amount (e.g., "25.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Account PIN (prompted if omitted)
        #[arg(short, long)]
        pin: Option<String>,
    },

    /// Verify an account PIN and show its balance
    Login {
        /// Account name
        account: String,
        /// Account PIN (prompted if omitted)
        #[arg(short, long)]
        pin: Option<String>,
    },

    /// Show current configuration and paths, or change settings
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let paths = TellerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ledger_path = settings.ledger_path(&paths);

    let Some(command) = cli.command else {
        println!("teller - PIN-gated account ledger");
        println!();
        println!("Run 'teller --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Account(cmd) => {
            let mut manager = AccountManager::open(&ledger_path)?;
            handle_account_command(&mut manager, &settings, cmd)?;
        }
        Commands::Deposit {
            account,
            amount,
            pin,
        } => {
            let mut manager = AccountManager::open(&ledger_path)?;
            handle_deposit(&mut manager, &settings, &account, &amount, pin)?;
        }
        Commands::Withdraw {
            account,
            amount,
            pin,
        } => {
            let mut manager = AccountManager::open(&ledger_path)?;
            handle_withdraw(&mut manager, &settings, &account, &amount, pin)?;
        }
        Commands::Login { account, pin } => {
            let manager = AccountManager::open(&ledger_path)?;
            handle_login(&manager, &settings, &account, pin)?;
        }
        Commands::Config(args) => {
            handle_config_command(&paths, settings, args)?;
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `TELLER_LOG` (default `warn`)
fn init_tracing() {
    let filter = EnvFilter::try_from_env("TELLER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
