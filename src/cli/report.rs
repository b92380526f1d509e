//! Report CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::reports::{CashFlowReport, NetWorthReport, SpendingReport};
use crate::services::{CurrencyService, Period};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Spending by category
    Spending {
        /// Period (day, week, month, year, all)
        #[arg(short, long, default_value = "month")]
        period: String,
        /// Emit CSV instead of the table
        #[arg(long)]
        csv: bool,
    },
    /// Income vs. expenses per month
    Cashflow {
        /// Number of trailing months
        #[arg(short, long, default_value = "6")]
        months: u32,
    },
    /// Account balances in the display currency
    Networth,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> FintrackResult<()> {
    match cmd {
        ReportCommands::Spending { period, csv } => {
            let period = Period::parse(&period).ok_or_else(|| {
                FintrackError::Validation(format!(
                    "Invalid period: '{}'. Valid periods: day, week, month, year, all",
                    period
                ))
            })?;

            let report = SpendingReport::generate(storage, period)?;
            if csv {
                report.export_csv(std::io::stdout().lock())?;
            } else {
                print!("{}", report.format_terminal());
            }
        }

        ReportCommands::Cashflow { months } => {
            let report = CashFlowReport::generate(storage, months.clamp(1, 60))?;
            print!("{}", report.format_terminal());
        }

        ReportCommands::Networth => {
            let currency = CurrencyService::new();
            let report = NetWorthReport::generate(storage, &currency, settings.currency)?;
            print!("{}", report.format_terminal());
        }
    }

    Ok(())
}
