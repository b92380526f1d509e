//! Account CLI commands

use clap::Subcommand;

use crate::display::{format_account_details, format_account_list};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{AccountKind, CurrencyCode, Money};
use crate::services::{AccountService, AccountUpdate};
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Add a new account
    Add {
        /// Account name
        name: String,
        /// Account type (checking, savings, credit, investment, cash, other)
        #[arg(short = 't', long = "type", default_value = "checking")]
        kind: String,
        /// Starting balance (e.g., "1000.00")
        #[arg(short, long, default_value = "0")]
        balance: String,
        /// Currency code (USD, EUR, GBP, JPY, CAD, AUD)
        #[arg(short, long, default_value = "USD")]
        currency: String,
        /// Institution holding the account
        #[arg(long)]
        institution: Option<String>,
        /// Last four digits of the account number
        #[arg(long)]
        last_four: Option<String>,
    },
    /// List accounts
    List {
        /// Include hidden accounts
        #[arg(short, long)]
        all: bool,
    },
    /// Show account details
    Show {
        /// Account name or ID
        account: String,
    },
    /// Edit an account
    Edit {
        /// Account name or ID
        account: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New type
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// New currency code
        #[arg(short, long)]
        currency: Option<String>,
        /// New institution (empty string clears)
        #[arg(long)]
        institution: Option<String>,
        /// New last four digits (empty string clears)
        #[arg(long)]
        last_four: Option<String>,
        /// Hide from lists and totals
        #[arg(long, conflicts_with = "unhide")]
        hide: bool,
        /// Unhide
        #[arg(long)]
        unhide: bool,
    },
    /// Delete an account and its transactions
    Delete {
        /// Account name or ID
        account: String,
    },
}

/// Handle an account command
pub fn handle_account_command(storage: &Storage, cmd: AccountCommands) -> FintrackResult<()> {
    let service = AccountService::new(storage);

    match cmd {
        AccountCommands::Add {
            name,
            kind,
            balance,
            currency,
            institution,
            last_four,
        } => {
            let kind = parse_kind(&kind)?;
            let currency = parse_currency(&currency)?;
            let balance = Money::parse(&balance)
                .map_err(|e| FintrackError::Validation(e.to_string()))?;

            let account = service.create(&name, kind, balance, currency)?;
            if institution.is_some() || last_four.is_some() {
                service.update(
                    account.id,
                    AccountUpdate {
                        institution,
                        last_four,
                        ..Default::default()
                    },
                )?;
            }

            println!("Account added successfully!");
            println!("  Name:    {}", account.name);
            println!("  Type:    {}", account.kind);
            println!(
                "  Balance: {}",
                account.balance.format_with_symbol(account.currency.symbol())
            );
            println!("  ID:      {}", account.id);
        }

        AccountCommands::List { all } => {
            let accounts = service.list(all)?;
            print!("{}", format_account_list(&accounts));
        }

        AccountCommands::Show { account } => {
            let found = service.require(&account)?;
            print!("{}", format_account_details(&found));
        }

        AccountCommands::Edit {
            account,
            name,
            kind,
            currency,
            institution,
            last_four,
            hide,
            unhide,
        } => {
            let found = service.require(&account)?;

            let kind = kind.as_deref().map(parse_kind).transpose()?;
            let currency = currency.as_deref().map(parse_currency).transpose()?;
            let hidden = if hide {
                Some(true)
            } else if unhide {
                Some(false)
            } else {
                None
            };

            let update = AccountUpdate {
                name,
                kind,
                currency,
                institution,
                last_four,
                color: None,
                hidden,
            };

            let updated = service.update(found.id, update)?;
            println!("Account updated successfully!");
            println!("  {}", updated);
        }

        AccountCommands::Delete { account } => {
            let found = service.require(&account)?;
            let removed = service.delete(found.id)?;
            println!("Account deleted successfully!");
            if removed > 0 {
                println!("  Removed {} associated transaction(s).", removed);
            }
        }
    }

    Ok(())
}

fn parse_kind(s: &str) -> FintrackResult<AccountKind> {
    AccountKind::parse(s).ok_or_else(|| {
        FintrackError::Validation(format!(
            "Invalid account type: '{}'. Valid types: checking, savings, credit, investment, cash, other",
            s
        ))
    })
}

fn parse_currency(s: &str) -> FintrackResult<CurrencyCode> {
    CurrencyCode::parse(s).ok_or_else(|| {
        FintrackError::Validation(format!(
            "Unknown currency '{}'. Supported: USD, EUR, GBP, JPY, CAD, AUD",
            s
        ))
    })
}
