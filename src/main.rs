use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::auth::AuthService;
use fintrack::cli::{
    handle_account_command, handle_auth_command, handle_budget_command, handle_config_command,
    handle_convert_command, handle_export_command, handle_notification_command,
    handle_report_command, handle_transaction_command, AccountCommands, AuthCommands,
    BudgetCommands, ConfigCommands, ExportCommands, NotificationCommands, ReportCommands,
    TransactionCommands,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal-based personal finance manager",
    long_about = "FinTrack is a terminal-based personal finance manager: track accounts \
                  and transactions, watch budget progress, convert currencies, and pull \
                  spending reports, all from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Sign in, sign out, and manage your identity
    #[command(subcommand)]
    Auth(AuthCommands),

    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Convert an amount between currencies
    Convert {
        /// Amount to convert (e.g., "100.00")
        amount: String,
        /// Source currency code
        from: String,
        /// Target currency code
        to: String,
    },

    /// Reports: spending, cash flow, net worth
    #[command(subcommand)]
    Report(ReportCommands),

    /// Notification center
    #[command(subcommand, alias = "notify")]
    Notifications(NotificationCommands),

    /// Show or change settings
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Export data as CSV, JSON, or YAML
    #[command(subcommand)]
    Export(ExportCommands),

    /// Initialize the data directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FintrackPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        // Commands that work without a session
        Some(Commands::Auth(cmd)) => handle_auth_command(&paths, cmd)?,
        Some(Commands::Config(cmd)) => handle_config_command(&paths, &mut settings, cmd)?,
        Some(Commands::Convert { amount, from, to }) => {
            handle_convert_command(&amount, &from, &to)?
        }
        Some(Commands::Init) => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialized FinTrack at: {}", paths.base_dir().display());
            println!();
            println!("Next steps:");
            println!("  fintrack auth register --name <you> --email <you@example.com>");
            println!("  fintrack account add \"Checking\" --balance 1000.00");
            println!("  fintrack tui");
        }
        None => {
            println!("FinTrack - Terminal-based personal finance manager");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack tui' to launch the interactive dashboard.");
        }

        // Everything else reads or writes account data and needs a session
        Some(command) => {
            let auth = AuthService::new(&paths);
            let user = auth.require_user()?;

            let mut storage = Storage::new(paths.clone())?;
            storage.load_all()?;

            match command {
                Commands::Tui => fintrack::tui::run_tui(&storage, &settings, &user)?,
                Commands::Account(cmd) => handle_account_command(&storage, cmd)?,
                Commands::Transaction(cmd) => {
                    handle_transaction_command(&storage, &settings, cmd)?
                }
                Commands::Budget(cmd) => handle_budget_command(&storage, cmd)?,
                Commands::Report(cmd) => handle_report_command(&storage, &settings, cmd)?,
                Commands::Notifications(cmd) => {
                    handle_notification_command(&storage, &settings, cmd)?
                }
                Commands::Export(cmd) => handle_export_command(&storage, cmd)?,
                Commands::Auth(_)
                | Commands::Config(_)
                | Commands::Convert { .. }
                | Commands::Init => unreachable!("handled above"),
            }
        }
    }

    Ok(())
}
