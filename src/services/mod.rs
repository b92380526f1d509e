//! Business logic layer
//!
//! Each service wraps the storage layer with the rules for one feature area.
//! Services are cheap to construct and borrow the storage for their lifetime.

pub mod account;
pub mod budget;
pub mod currency;
pub mod notification;
pub mod summary;
pub mod transaction;

pub use account::{AccountService, AccountUpdate};
pub use budget::{BudgetProgress, BudgetService, BudgetUpdate};
pub use currency::{CurrencyService, FixedRateSource, RateSource, RateTable};
pub use notification::{NotificationService, BUDGET_ALERT_THRESHOLD};
pub use summary::{CategoryTotal, Period, SummaryService};
pub use transaction::{NewTransaction, TransactionFilter, TransactionService, TransactionUpdate};
