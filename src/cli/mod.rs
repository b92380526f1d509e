//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod auth;
pub mod budget;
pub mod config;
pub mod convert;
pub mod export;
pub mod notification;
pub mod report;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use auth::{handle_auth_command, AuthCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use convert::handle_convert_command;
pub use export::{handle_export_command, ExportCommands};
pub use notification::{handle_notification_command, NotificationCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
