//! Storage layer for FinTrack
//!
//! JSON file storage with atomic writes and automatic directory creation.
//! Each collection lives in its own file under the data directory, the way
//! the dashboard kept one localStorage key per collection.

pub mod accounts;
pub mod budgets;
pub mod file_io;
pub mod notifications;
pub mod transactions;

pub use accounts::AccountRepository;
pub use budgets::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use notifications::NotificationRepository;
pub use transactions::TransactionRepository;

use crate::config::paths::FintrackPaths;
use crate::error::FintrackError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FintrackPaths,
    pub accounts: AccountRepository,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    pub notifications: NotificationRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FintrackPaths) -> Result<Self, FintrackError> {
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            notifications: NotificationRepository::new(paths.notifications_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FintrackError> {
        self.accounts.load()?;
        self.transactions.load()?;
        self.budgets.load()?;
        self.notifications.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FintrackError> {
        self.accounts.save()?;
        self.transactions.save()?;
        self.budgets.save()?;
        self.notifications.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.load_all().unwrap();
        storage.save_all().unwrap();
        assert!(temp_dir.path().join("data").join("accounts.json").exists());
    }
}
