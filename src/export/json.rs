//! JSON export
//!
//! One self-contained snapshot document holding every collection.

use std::io::Write;

use serde::Serialize;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Account, Budget, Transaction};
use crate::storage::Storage;

/// A full data snapshot
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
}

impl Snapshot {
    /// Collect a snapshot of all stored data
    pub fn collect(storage: &Storage) -> FintrackResult<Self> {
        Ok(Self {
            accounts: storage.accounts.get_all()?,
            transactions: storage.transactions.get_all()?,
            budgets: storage.budgets.get_all()?,
        })
    }
}

/// Export a snapshot of all data as pretty-printed JSON
pub fn export_json<W: Write>(storage: &Storage, writer: W) -> FintrackResult<()> {
    let snapshot = Snapshot::collect(storage)?;
    serde_json::to_writer_pretty(writer, &snapshot)
        .map_err(|e| FintrackError::Export(e.to_string()))
}
