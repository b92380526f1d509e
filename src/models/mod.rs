//! Core data models
//!
//! Flat records with type-shape invariants: accounts, transactions, budgets,
//! the fixed category table, notifications, users, and the supporting Money
//! and ID newtypes. Relationships are by-id references maintained by the
//! service layer, not enforced referential integrity.

pub mod account;
pub mod budget;
pub mod category;
pub mod currency;
pub mod ids;
pub mod money;
pub mod notification;
pub mod transaction;
pub mod user;

pub use account::{Account, AccountKind, AccountValidationError};
pub use budget::{Budget, BudgetPeriod, BudgetValidationError};
pub use category::Category;
pub use currency::CurrencyCode;
pub use ids::{AccountId, BudgetId, NotificationId, TransactionId, UserId};
pub use money::{Money, MoneyParseError};
pub use notification::{
    Notification, NotificationCategory, NotificationPreferences, Priority,
};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
pub use user::User;
