//! Terminal output formatting
//!
//! Hand-formatted tables and detail views for the CLI commands.

pub mod account;
pub mod budget;
pub mod notification;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use budget::{format_budget_details, format_budget_list};
pub use notification::format_notification_list;
pub use transaction::{format_transaction_details, format_transaction_list};
