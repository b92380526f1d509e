//! Transaction service
//!
//! Adding, updating, and deleting transactions keeps the owning account's
//! stored balance in step by applying signed deltas, accumulates spending
//! into matching budgets, and raises a spending alert when a budget crosses
//! the alert threshold.

use chrono::{Local, NaiveDate, Utc};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    Category, Money, NotificationCategory, NotificationPreferences, Priority, Transaction,
    TransactionId, TransactionKind,
};
use crate::storage::Storage;

use super::notification::{NotificationService, BUDGET_ALERT_THRESHOLD};

/// Input for a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub account: String,
    pub date: Option<NaiveDate>,
    pub amount: Money,
    pub description: String,
    pub category: Option<String>,
    pub kind: TransactionKind,
    pub recurring: bool,
    pub notes: String,
    pub tags: Vec<String>,
}

/// Field updates for a transaction; None leaves the field unchanged.
/// An empty category string clears the category.
#[derive(Debug, Clone, Default)]
pub struct TransactionUpdate {
    pub date: Option<NaiveDate>,
    pub amount: Option<Money>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
    pub notes: Option<String>,
    pub recurring: Option<bool>,
}

/// Filters for listing transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub account: Option<String>,
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
    notifications: NotificationService<'a>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage, preferences: NotificationPreferences) -> Self {
        Self {
            storage,
            notifications: NotificationService::new(storage, preferences),
        }
    }

    /// Add a transaction, applying its signed amount to the account balance
    pub fn add(&self, input: NewTransaction) -> FintrackResult<Transaction> {
        let mut account = self
            .storage
            .accounts
            .get_by_name(&input.account)?
            .or_else(|| {
                input
                    .account
                    .parse()
                    .ok()
                    .and_then(|id| self.storage.accounts.get(id).ok().flatten())
            })
            .ok_or_else(|| FintrackError::account_not_found(&input.account))?;

        if let Some(slug) = &input.category {
            if !Category::is_valid_slug(slug) {
                return Err(FintrackError::Validation(format!(
                    "Unknown category '{}'. Run 'fintrack budget categories' for the list",
                    slug
                )));
            }
        }

        let date = input.date.unwrap_or_else(|| Local::now().date_naive());
        let mut txn = Transaction::new(account.id, date, input.amount, input.description, input.kind);
        txn.category = input.category;
        txn.recurring = input.recurring;
        txn.notes = input.notes;
        txn.tags = input.tags;

        txn.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        account.apply(txn.signed_amount());
        self.storage.accounts.upsert(account)?;
        self.storage.transactions.upsert(txn.clone())?;
        self.storage.accounts.save()?;
        self.storage.transactions.save()?;

        self.apply_to_budgets(&txn, Local::now().date_naive())?;

        self.notifications.notify(
            "Transaction Added",
            format!(
                "Your transaction for {} at {} has been recorded.",
                txn.amount, txn.description
            ),
            NotificationCategory::Updates,
            Priority::Low,
        )?;

        Ok(txn)
    }

    /// Accumulate an expense into budgets tracking its category and alert
    /// on threshold crossings
    fn apply_to_budgets(&self, txn: &Transaction, today: NaiveDate) -> FintrackResult<()> {
        if !txn.is_expense() {
            return Ok(());
        }
        let Some(slug) = txn.category.as_deref() else {
            return Ok(());
        };

        for mut budget in self.storage.budgets.get_by_category(slug)? {
            let (start, end) = budget.active_window(today);
            if txn.date < start || txn.date > end {
                continue;
            }

            let before = budget.percent_spent_raw();
            budget.record_spend(txn.amount);
            let after = budget.percent_spent_raw();

            if before < BUDGET_ALERT_THRESHOLD && after >= BUDGET_ALERT_THRESHOLD {
                self.notifications.budget_threshold_alert(&budget)?;
            }

            self.storage.budgets.upsert(budget)?;
        }
        self.storage.budgets.save()?;

        Ok(())
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> FintrackResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// List transactions, newest first, honoring the filter
    pub fn list(&self, filter: TransactionFilter) -> FintrackResult<Vec<Transaction>> {
        let account_id = match &filter.account {
            Some(identifier) => {
                let account = self
                    .storage
                    .accounts
                    .get_by_name(identifier)?
                    .or_else(|| {
                        identifier
                            .parse()
                            .ok()
                            .and_then(|id| self.storage.accounts.get(id).ok().flatten())
                    })
                    .ok_or_else(|| FintrackError::account_not_found(identifier))?;
                Some(account.id)
            }
            None => None,
        };

        let mut transactions: Vec<_> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| account_id.is_none_or(|id| t.account_id == id))
            .filter(|t| {
                filter
                    .category
                    .as_deref()
                    .is_none_or(|slug| t.category.as_deref() == Some(slug))
            })
            .filter(|t| filter.kind.is_none_or(|k| t.kind == k))
            .filter(|t| filter.from.is_none_or(|from| t.date >= from))
            .filter(|t| filter.to.is_none_or(|to| t.date <= to))
            .collect();

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Search transactions by description substring (case-insensitive)
    pub fn search(&self, query: &str) -> FintrackResult<Vec<Transaction>> {
        let query = query.to_lowercase();
        Ok(self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| t.description.to_lowercase().contains(&query))
            .collect())
    }

    /// Update a transaction, re-applying the balance delta
    pub fn update(&self, id: TransactionId, update: TransactionUpdate) -> FintrackResult<Transaction> {
        let mut txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

        let old_signed = txn.signed_amount();

        if let Some(date) = update.date {
            txn.date = date;
        }
        if let Some(amount) = update.amount {
            txn.amount = amount;
        }
        if let Some(description) = update.description {
            txn.description = description;
        }
        if let Some(category) = update.category {
            if category.is_empty() {
                txn.category = None;
            } else {
                if !Category::is_valid_slug(&category) {
                    return Err(FintrackError::Validation(format!(
                        "Unknown category '{}'",
                        category
                    )));
                }
                txn.category = Some(category);
            }
        }
        if let Some(kind) = update.kind {
            txn.kind = kind;
        }
        if let Some(notes) = update.notes {
            txn.notes = notes;
        }
        if let Some(recurring) = update.recurring {
            txn.recurring = recurring;
        }
        txn.updated_at = Utc::now();

        txn.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        // Re-apply the balance effect when the signed amount moved
        let new_signed = txn.signed_amount();
        if new_signed != old_signed {
            let mut account = self
                .storage
                .accounts
                .get(txn.account_id)?
                .ok_or_else(|| FintrackError::account_not_found(txn.account_id.to_string()))?;
            account.apply(new_signed - old_signed);
            self.storage.accounts.upsert(account)?;
            self.storage.accounts.save()?;
        }

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        Ok(txn)
    }

    /// Delete a transaction, reversing its balance effect
    pub fn delete(&self, id: TransactionId) -> FintrackResult<()> {
        let txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

        // The account may already be gone if the delete came from a cascade
        if let Some(mut account) = self.storage.accounts.get(txn.account_id)? {
            account.apply(-txn.signed_amount());
            self.storage.accounts.upsert(account)?;
            self.storage.accounts.save()?;
        }

        self.storage.transactions.delete(id)?;
        self.storage.transactions.save()?;

        Ok(())
    }
}
