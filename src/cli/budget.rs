//! Budget CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::{format_budget_details, format_budget_list};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{BudgetPeriod, Category, Money};
use crate::services::{BudgetService, BudgetUpdate};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Add a new budget
    Add {
        /// Budget name
        name: String,
        /// Target amount (e.g. "500.00")
        amount: String,
        /// Category slug the budget tracks (e.g. food)
        category: String,
        /// Recurrence period (weekly, monthly, yearly)
        #[arg(short, long, default_value = "monthly")]
        period: String,
        /// Start date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        start: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
    },
    /// List budgets with progress
    List,
    /// Show budget details
    Show {
        /// Budget name or ID
        budget: String,
    },
    /// Edit a budget
    Edit {
        /// Budget name or ID
        budget: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New target amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category slug
        #[arg(short, long)]
        category: Option<String>,
        /// New period (weekly, monthly, yearly)
        #[arg(short, long)]
        period: Option<String>,
        /// New end date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
    },
    /// Delete a budget
    Delete {
        /// Budget name or ID
        budget: String,
    },
    /// Re-derive spent amounts from the transaction log
    Refresh {
        /// Budget name or ID (all budgets when omitted)
        budget: Option<String>,
    },
    /// List the available category slugs
    Categories,
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> FintrackResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Add {
            name,
            amount,
            category,
            period,
            start,
            end,
        } => {
            let amount = parse_amount(&amount)?;
            let period = parse_period(&period)?;
            let start = start.as_deref().map(parse_date).transpose()?;

            let budget = service.create(&name, amount, &category, period, start)?;
            if let Some(end) = end {
                service.update(
                    budget.id,
                    BudgetUpdate {
                        end_date: Some(parse_date(&end)?),
                        ..Default::default()
                    },
                )?;
            }

            println!("Budget created successfully!");
            println!("  {}", budget);
        }

        BudgetCommands::List => {
            let budgets = service.list_with_progress()?;
            print!("{}", format_budget_list(&budgets));
        }

        BudgetCommands::Show { budget } => {
            let found = service.require(&budget)?;
            print!("{}", format_budget_details(&BudgetService::progress(found)));
        }

        BudgetCommands::Edit {
            budget,
            name,
            amount,
            category,
            period,
            end,
        } => {
            let found = service.require(&budget)?;

            let update = BudgetUpdate {
                name,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category,
                period: period.as_deref().map(parse_period).transpose()?,
                end_date: end.as_deref().map(parse_date).transpose()?,
                color: None,
            };

            let updated = service.update(found.id, update)?;
            println!("Budget updated successfully!");
            println!("  {}", updated);
        }

        BudgetCommands::Delete { budget } => {
            let found = service.require(&budget)?;
            service.delete(found.id)?;
            println!("Budget deleted successfully!");
        }

        BudgetCommands::Refresh { budget } => match budget {
            Some(identifier) => {
                let found = service.require(&identifier)?;
                let refreshed = service.refresh_spent(found.id)?;
                println!("Refreshed: {}", refreshed);
            }
            None => {
                let refreshed = service.refresh_all()?;
                for budget in &refreshed {
                    println!("Refreshed: {}", budget);
                }
                if refreshed.is_empty() {
                    println!("No budgets to refresh.");
                }
            }
        },

        BudgetCommands::Categories => {
            for category in Category::all() {
                println!("{:<16} {}", category.slug, category.name);
            }
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

fn parse_period(s: &str) -> FintrackResult<BudgetPeriod> {
    BudgetPeriod::parse(s).ok_or_else(|| {
        FintrackError::Validation(format!(
            "Invalid period: '{}'. Valid periods: weekly, monthly, yearly",
            s
        ))
    })
}
