//! Transaction CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, TransactionId, TransactionKind};
use crate::services::{NewTransaction, TransactionFilter, TransactionService, TransactionUpdate};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Account name or ID
        account: String,
        /// Amount (non-negative, e.g. "45.99")
        amount: String,
        /// What the money was for
        description: String,
        /// Transaction type (income, expense, transfer)
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
        /// Category slug (e.g. food, housing)
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
        /// Mark as recurring
        #[arg(short, long)]
        recurring: bool,
        /// Tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// List transactions
    List {
        /// Filter by account name or ID
        #[arg(short, long)]
        account: Option<String>,
        /// Filter by category slug
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by type (income, expense, transfer)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Earliest date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Latest date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New amount
        #[arg(long)]
        amount: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category slug (empty string clears)
        #[arg(short, long)]
        category: Option<String>,
        /// New type (income, expense, transfer)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
    /// Search transactions by description
    Search {
        /// Substring to search for
        query: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FintrackResult<()> {
    let service = TransactionService::new(storage, settings.notifications.clone());

    match cmd {
        TransactionCommands::Add {
            account,
            amount,
            description,
            kind,
            category,
            date,
            notes,
            recurring,
            tags,
        } => {
            let txn = service.add(NewTransaction {
                account,
                date: date.as_deref().map(parse_date).transpose()?,
                amount: parse_amount(&amount)?,
                description,
                category,
                kind: parse_kind(&kind)?,
                recurring,
                notes: notes.unwrap_or_default(),
                tags,
            })?;

            println!("Transaction added successfully!");
            println!("  {}", txn);
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List {
            account,
            category,
            kind,
            from,
            to,
            limit,
        } => {
            let filter = TransactionFilter {
                account,
                category,
                kind: kind.as_deref().map(parse_kind).transpose()?,
                from: from.as_deref().map(parse_date).transpose()?,
                to: to.as_deref().map(parse_date).transpose()?,
                limit: Some(limit),
            };

            let transactions = service.list(filter)?;
            print!("{}", format_transaction_list(&transactions, storage));
        }

        TransactionCommands::Show { id } => {
            let id = parse_id(&id)?;
            let txn = service
                .get(id)?
                .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;
            print!("{}", format_transaction_details(&txn));
        }

        TransactionCommands::Edit {
            id,
            amount,
            description,
            category,
            kind,
            date,
            notes,
        } => {
            let update = TransactionUpdate {
                date: date.as_deref().map(parse_date).transpose()?,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                description,
                category,
                kind: kind.as_deref().map(parse_kind).transpose()?,
                notes,
                recurring: None,
            };

            let txn = service.update(parse_id(&id)?, update)?;
            println!("Transaction updated successfully!");
            println!("  {}", txn);
        }

        TransactionCommands::Delete { id } => {
            service.delete(parse_id(&id)?)?;
            println!("Transaction deleted successfully!");
        }

        TransactionCommands::Search { query } => {
            let transactions = service.search(&query)?;
            print!("{}", format_transaction_list(&transactions, storage));
        }
    }

    Ok(())
}

fn parse_amount(s: &str) -> FintrackResult<Money> {
    Money::parse(s).map_err(|e| FintrackError::Validation(e.to_string()))
}

fn parse_date(s: &str) -> FintrackResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| FintrackError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", s)))
}

fn parse_kind(s: &str) -> FintrackResult<TransactionKind> {
    TransactionKind::parse(s).ok_or_else(|| {
        FintrackError::Validation(format!(
            "Invalid transaction type: '{}'. Valid types: income, expense, transfer",
            s
        ))
    })
}

fn parse_id(s: &str) -> FintrackResult<TransactionId> {
    s.parse()
        .map_err(|_| FintrackError::Validation(format!("Invalid transaction ID '{}'", s)))
}
