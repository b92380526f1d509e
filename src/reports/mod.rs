//! Reports
//!
//! Read-only derivations over the stored data: spending by category, cash
//! flow per month, and net worth across accounts.

pub mod cash_flow;
pub mod net_worth;
pub mod spending;

pub use cash_flow::{CashFlowReport, MonthFlow};
pub use net_worth::{AccountWorth, NetWorthReport};
pub use spending::SpendingReport;
