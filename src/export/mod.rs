//! Data export
//!
//! Snapshots of the stored collections in CSV, JSON, and YAML.

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_accounts_csv, export_budgets_csv, export_transactions_csv};
pub use json::{export_json, Snapshot};
pub use yaml::export_yaml;
