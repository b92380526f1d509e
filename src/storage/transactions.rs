//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json, with the
//! filtered queries the services and reports run (by account, by category,
//! by date range).

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::FintrackError;
use crate::models::{AccountId, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction file structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for txn in file_data.transactions {
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(a.created_at.cmp(&b.created_at)));

        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all transactions, newest first
    pub fn get_all(&self) -> Result<Vec<Transaction>, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(transactions)
    }

    /// Get all transactions for an account, newest first
    pub fn get_by_account(&self, account_id: AccountId) -> Result<Vec<Transaction>, FintrackError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|t| t.account_id == account_id)
            .collect())
    }

    /// Get all transactions with a category slug, newest first
    pub fn get_by_category(&self, slug: &str) -> Result<Vec<Transaction>, FintrackError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|t| t.category.as_deref() == Some(slug))
            .collect())
    }

    /// Get all transactions dated within [start, end], newest first
    pub fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, FintrackError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|t| t.date >= start && t.date <= end)
            .collect())
    }

    /// Insert or update a transaction
    pub fn upsert(&self, txn: Transaction) -> Result<(), FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction, returning whether it existed
    pub fn delete(&self, id: TransactionId) -> Result<bool, FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Delete every transaction owned by an account, returning the count
    pub fn delete_by_account(&self, account_id: AccountId) -> Result<usize, FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|_, t| t.account_id != account_id);
        Ok(before - data.len())
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
